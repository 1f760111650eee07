// HTTP request handlers
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use flight_network_repository::FlightGraphError;
use flight_network_shared::{Airport, AirportDetails, City, FlightDetails, Route};

use crate::error::ApiError;
use crate::models::{
    CityFilter, MessageResponse, RegisterAirportRequest, RegisterCityRequest,
    RegisterFlightRequest,
};
use crate::server::state::AppState;

type ApiResult<T> = Result<T, ApiError>;

/// Unwrap a JSON body, reporting unparseable bodies as invalid input.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| FlightGraphError::invalid_input(rejection.body_text()).into())
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Flight network service is running")
}

/// PUT /cities
pub async fn register_city(
    State(state): State<AppState>,
    payload: Result<Json<RegisterCityRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let city = json_body(payload)?.into_new_city()?;
    state.service.register_city(city).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /cities?country=
pub async fn list_cities(
    State(state): State<AppState>,
    Query(filter): Query<CityFilter>,
) -> ApiResult<Json<Vec<City>>> {
    let cities = state.service.list_cities(filter.country.as_deref()).await?;
    Ok(Json(cities))
}

/// GET /cities/:name
pub async fn get_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<City>> {
    Ok(Json(state.service.get_city(&name).await?))
}

/// PUT /cities/:name/airports
pub async fn register_airport(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<RegisterAirportRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let airport = json_body(payload)?.into_new_airport()?;
    state.service.register_airport(&name, airport).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /cities/:name/airports
pub async fn list_airports_in_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<Airport>>> {
    Ok(Json(state.service.list_airports_in_city(&name).await?))
}

/// GET /airports/:code
pub async fn get_airport(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<AirportDetails>> {
    Ok(Json(state.service.get_airport(&code).await?))
}

/// PUT /flights
pub async fn register_flight(
    State(state): State<AppState>,
    payload: Result<Json<RegisterFlightRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let flight = json_body(payload)?.into_new_flight()?;
    state.service.register_flight(flight).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /flights/:number
pub async fn get_flight(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> ApiResult<Json<FlightDetails>> {
    Ok(Json(state.service.get_flight(&number).await?))
}

/// GET /search/flights/:from_city/:to_city
pub async fn find_flights(
    State(state): State<AppState>,
    Path((from_city, to_city)): Path<(String, String)>,
) -> ApiResult<Json<Vec<Route>>> {
    Ok(Json(state.service.find_flights(&from_city, &to_city).await?))
}

/// POST /cleanup
pub async fn cleanup(State(state): State<AppState>) -> ApiResult<Json<MessageResponse>> {
    state.service.cleanup().await?;
    Ok(Json(MessageResponse::new("Cleanup successful")))
}
