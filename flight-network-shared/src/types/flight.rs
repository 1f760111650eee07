//! Flight records.

use serde::{Deserialize, Serialize};

/// Input for registering a flight between two airports.
///
/// Flights are directional: a flight from `from_airport` to `to_airport`
/// says nothing about the reverse direction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFlight {
    pub number: String,
    pub from_airport: String,
    pub to_airport: String,
    pub price: f64,
    pub flight_time_in_minutes: i64,
    pub operator: String,
}

/// A flight joined with both of its endpoint airports and their cities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetails {
    pub number: String,
    pub from_airport: String,
    pub from_city: String,
    pub to_airport: String,
    pub to_city: String,
    pub price: f64,
    pub flight_time_in_minutes: i64,
    pub operator: String,
}
