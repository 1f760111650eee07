//! Airport records.
//!
//! An airport is owned by exactly one city through a `HAS_AIRPORT` edge. The
//! plain [`Airport`] is what a city listing returns; [`AirportDetails`] adds
//! the owning city's name and is returned by a lookup on the airport code.

use serde::{Deserialize, Serialize};

/// An airport as listed under its city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub number_of_terminals: i64,
    pub address: String,
}

/// An airport together with the name of the city that owns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AirportDetails {
    pub code: String,
    pub city: String,
    pub name: String,
    pub number_of_terminals: i64,
    pub address: String,
}

impl AirportDetails {
    pub fn new(airport: Airport, city: impl Into<String>) -> Self {
        Self {
            code: airport.code,
            city: city.into(),
            name: airport.name,
            number_of_terminals: airport.number_of_terminals,
            address: airport.address,
        }
    }
}

/// Input for registering an airport. The owning city is passed separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAirport {
    pub code: String,
    pub name: String,
    pub number_of_terminals: i64,
    pub address: String,
}

impl From<NewAirport> for Airport {
    fn from(airport: NewAirport) -> Self {
        Self {
            code: airport.code,
            name: airport.name,
            number_of_terminals: airport.number_of_terminals,
            address: airport.address,
        }
    }
}
