// Request and response payloads
use flight_network_repository::FlightGraphError;
use flight_network_shared::{NewAirport, NewCity, NewFlight};
use serde::{Deserialize, Serialize};

/// Body of every error response and of plain acknowledgements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Query string of `GET /cities`
#[derive(Debug, Default, Deserialize)]
pub struct CityFilter {
    pub country: Option<String>,
}

/// Body of `PUT /cities`
#[derive(Debug, Default, Deserialize)]
pub struct RegisterCityRequest {
    pub name: Option<String>,
    pub country: Option<String>,
}

/// Body of `PUT /cities/:name/airports`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAirportRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub number_of_terminals: Option<i64>,
    pub address: Option<String>,
}

/// Body of `PUT /flights`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFlightRequest {
    pub number: Option<String>,
    pub from_airport: Option<String>,
    pub to_airport: Option<String>,
    pub price: Option<f64>,
    pub flight_time_in_minutes: Option<i64>,
    pub operator: Option<String>,
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, FlightGraphError> {
    value.ok_or_else(|| FlightGraphError::missing_field(field))
}

impl RegisterCityRequest {
    pub fn into_new_city(self) -> Result<NewCity, FlightGraphError> {
        Ok(NewCity {
            name: required("name", self.name)?,
            country: required("country", self.country)?,
        })
    }
}

impl RegisterAirportRequest {
    pub fn into_new_airport(self) -> Result<NewAirport, FlightGraphError> {
        Ok(NewAirport {
            code: required("code", self.code)?,
            name: required("name", self.name)?,
            number_of_terminals: required("numberOfTerminals", self.number_of_terminals)?,
            address: required("address", self.address)?,
        })
    }
}

impl RegisterFlightRequest {
    pub fn into_new_flight(self) -> Result<NewFlight, FlightGraphError> {
        Ok(NewFlight {
            number: required("number", self.number)?,
            from_airport: required("fromAirport", self.from_airport)?,
            to_airport: required("toAirport", self.to_airport)?,
            price: required("price", self.price)?,
            flight_time_in_minutes: required("flightTimeInMinutes", self.flight_time_in_minutes)?,
            operator: required("operator", self.operator)?,
        })
    }
}
