//! Flight graph service implementation.
//!
//! This module provides the high-level API over a `FlightGraphProvider`: it
//! validates inputs, runs the existence checks each operation requires and
//! turns provider outcomes into `FlightGraphError`s.

use flight_network_shared::{
    Airport, AirportDetails, City, FlightDetails, NewAirport, NewCity, NewFlight, Route,
    MAX_FLIGHT_SEGMENTS, MAX_FLIGHT_TIME_IN_MINUTES,
};
use tracing::{debug, info};

use crate::errors::FlightGraphError;
use crate::interfaces::{FlightGraphProvider, InsertOutcome};

/// The main service for registering and querying the flight network.
///
/// Application code talks to this type; the storage backend is injected as a
/// boxed `FlightGraphProvider`.
///
/// # Example
///
/// ```
/// use flight_network_repository::{FlightGraphService, InMemoryFlightGraph};
/// use flight_network_shared::NewCity;
///
/// # async fn example() -> Result<(), flight_network_repository::FlightGraphError> {
/// let service = FlightGraphService::new(Box::new(InMemoryFlightGraph::new()));
///
/// service
///     .register_city(NewCity {
///         name: "Vilnius".to_string(),
///         country: "LT".to_string(),
///     })
///     .await?;
///
/// let city = service.get_city("Vilnius").await?;
/// assert_eq!(city.country, "LT");
/// # Ok(())
/// # }
/// ```
pub struct FlightGraphService {
    provider: Box<dyn FlightGraphProvider>,
}

impl FlightGraphService {
    /// Create a new service over the given provider.
    pub fn new(provider: Box<dyn FlightGraphProvider>) -> Self {
        Self { provider }
    }

    /// Prepare the backend (indexes, constraints). Call once at startup.
    pub async fn initialize(&self) -> Result<(), FlightGraphError> {
        self.provider.ensure_schema().await
    }

    /// Reject blank strings for a required field.
    fn validate_required(field_name: &str, value: &str) -> Result<(), FlightGraphError> {
        if value.trim().is_empty() {
            return Err(FlightGraphError::invalid_input(format!(
                "Mandatory attribute '{}' must not be empty",
                field_name
            )));
        }
        Ok(())
    }

    /// Reject negative counts and durations.
    fn validate_non_negative(field_name: &str, value: i64) -> Result<(), FlightGraphError> {
        if value < 0 {
            return Err(FlightGraphError::invalid_input(format!(
                "'{}' must not be negative",
                field_name
            )));
        }
        Ok(())
    }

    /// Bound flight times so route aggregates cannot overflow.
    fn validate_flight_time(value: i64) -> Result<(), FlightGraphError> {
        Self::validate_non_negative("flightTimeInMinutes", value)?;
        if value > MAX_FLIGHT_TIME_IN_MINUTES {
            return Err(FlightGraphError::invalid_input(format!(
                "'flightTimeInMinutes' must not exceed {}",
                MAX_FLIGHT_TIME_IN_MINUTES
            )));
        }
        Ok(())
    }

    /// Reject negative or non-finite prices.
    fn validate_price(value: f64) -> Result<(), FlightGraphError> {
        if !value.is_finite() || value < 0.0 {
            return Err(FlightGraphError::invalid_input(
                "'price' must be a non-negative number",
            ));
        }
        Ok(())
    }

    /// Register a city.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the city was created
    /// * `Err(FlightGraphError::InvalidInput)` - If name or country is blank
    /// * `Err(FlightGraphError::DuplicateEntity)` - If the same (name, country) already exists
    pub async fn register_city(&self, city: NewCity) -> Result<(), FlightGraphError> {
        Self::validate_required("name", &city.name)?;
        Self::validate_required("country", &city.country)?;

        match self.provider.insert_city(&city).await? {
            InsertOutcome::Created => {
                info!(city = %city.name, country = %city.country, "City registered");
                Ok(())
            }
            _ => Err(FlightGraphError::duplicate(
                "Could not register the city, it already exists",
            )),
        }
    }

    /// List all cities, optionally restricted to one country.
    ///
    /// An empty country filter is treated as no filter.
    pub async fn list_cities(&self, country: Option<&str>) -> Result<Vec<City>, FlightGraphError> {
        let country = country.filter(|c| !c.is_empty());
        self.provider.list_cities(country).await
    }

    /// Look up a city by name.
    pub async fn get_city(&self, name: &str) -> Result<City, FlightGraphError> {
        self.provider
            .find_city(name)
            .await?
            .ok_or_else(|| FlightGraphError::not_found("City not found"))
    }

    /// Register an airport under an existing city.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the airport and its `HAS_AIRPORT` edge were created
    /// * `Err(FlightGraphError::InvalidInput)` - If a field is blank or the terminal count is negative
    /// * `Err(FlightGraphError::NotFound)` - If the city does not exist
    /// * `Err(FlightGraphError::DuplicateEntity)` - If the airport code is already registered
    pub async fn register_airport(
        &self,
        city_name: &str,
        airport: NewAirport,
    ) -> Result<(), FlightGraphError> {
        Self::validate_required("code", &airport.code)?;
        Self::validate_required("name", &airport.name)?;
        Self::validate_non_negative("numberOfTerminals", airport.number_of_terminals)?;
        Self::validate_required("address", &airport.address)?;

        match self.provider.insert_airport(city_name, &airport).await? {
            InsertOutcome::Created => {
                info!(city = %city_name, code = %airport.code, "Airport registered");
                Ok(())
            }
            InsertOutcome::MissingParent => Err(FlightGraphError::not_found("City not found")),
            InsertOutcome::Duplicate => Err(FlightGraphError::duplicate(
                "Could not register the airport, it already exists",
            )),
        }
    }

    /// List the airports of a city.
    ///
    /// # Returns
    ///
    /// * `Err(FlightGraphError::NotFound)` - If the city does not exist
    /// * `Err(FlightGraphError::EmptyResult)` - If the city exists but has no airports
    pub async fn list_airports_in_city(
        &self,
        city_name: &str,
    ) -> Result<Vec<Airport>, FlightGraphError> {
        self.get_city(city_name).await?;

        let airports = self.provider.list_airports(city_name).await?;
        if airports.is_empty() {
            return Err(FlightGraphError::empty_result(
                "No airports found in the city",
            ));
        }
        Ok(airports)
    }

    /// Look up an airport by code, including the name of its city.
    pub async fn get_airport(&self, code: &str) -> Result<AirportDetails, FlightGraphError> {
        self.provider
            .find_airport(code)
            .await?
            .ok_or_else(|| FlightGraphError::not_found("Airport not found"))
    }

    /// Register a directional flight between two existing airports.
    ///
    /// Flight numbers are not unique; registering the same number twice
    /// creates two flights.
    ///
    /// # Returns
    ///
    /// * `Err(FlightGraphError::InvalidInput)` - If a field is blank or a number is negative
    /// * `Err(FlightGraphError::NotFound)` - If either airport does not exist
    pub async fn register_flight(&self, flight: NewFlight) -> Result<(), FlightGraphError> {
        Self::validate_required("number", &flight.number)?;
        Self::validate_required("fromAirport", &flight.from_airport)?;
        Self::validate_required("toAirport", &flight.to_airport)?;
        Self::validate_price(flight.price)?;
        Self::validate_flight_time(flight.flight_time_in_minutes)?;
        Self::validate_required("operator", &flight.operator)?;

        match self.provider.insert_flight(&flight).await? {
            InsertOutcome::MissingParent => {
                Err(FlightGraphError::not_found("One or both airports not found"))
            }
            _ => {
                info!(
                    number = %flight.number,
                    from = %flight.from_airport,
                    to = %flight.to_airport,
                    "Flight registered"
                );
                Ok(())
            }
        }
    }

    /// Look up a flight by number, joined with both endpoint airports and cities.
    pub async fn get_flight(&self, number: &str) -> Result<FlightDetails, FlightGraphError> {
        self.provider
            .find_flight(number)
            .await?
            .ok_or_else(|| FlightGraphError::not_found("Flight not found"))
    }

    /// Find every itinerary of up to `MAX_FLIGHT_SEGMENTS` flights between two cities.
    ///
    /// Routes are returned unranked, each with its aggregate price, flight
    /// time and number of stops.
    ///
    /// # Returns
    ///
    /// * `Err(FlightGraphError::NotFound)` - If either city is unknown, either
    ///   city has no airports, or no route exists within the bound
    pub async fn find_flights(
        &self,
        from_city: &str,
        to_city: &str,
    ) -> Result<Vec<Route>, FlightGraphError> {
        let (from, to) = (
            self.provider.find_city(from_city).await?,
            self.provider.find_city(to_city).await?,
        );
        if from.is_none() || to.is_none() {
            return Err(FlightGraphError::not_found("One or both cities not found"));
        }

        let from_airports = self.provider.list_airports(from_city).await?;
        let to_airports = self.provider.list_airports(to_city).await?;
        if from_airports.is_empty() || to_airports.is_empty() {
            return Err(FlightGraphError::not_found(
                "No airports found in one or both cities",
            ));
        }

        let routes = self
            .provider
            .find_routes(from_city, to_city, MAX_FLIGHT_SEGMENTS)
            .await?;
        debug!(
            from_city = %from_city,
            to_city = %to_city,
            routes = routes.len(),
            "Route search finished"
        );

        if routes.is_empty() {
            return Err(FlightGraphError::not_found("Flights not found"));
        }
        Ok(routes)
    }

    /// Delete every city, airport and flight.
    pub async fn cleanup(&self) -> Result<(), FlightGraphError> {
        self.provider.clear().await?;
        info!("Flight graph cleared");
        Ok(())
    }
}
