//! # Flight Network Shared
//!
//! Domain records shared between the flight graph repository and the HTTP
//! service: cities, airports, flights and the itineraries returned by route
//! search.

pub mod types;

pub use types::airport::{Airport, AirportDetails, NewAirport};
pub use types::city::{City, NewCity};
pub use types::flight::{FlightDetails, NewFlight};
pub use types::route::{Route, MAX_FLIGHT_SEGMENTS, MAX_FLIGHT_TIME_IN_MINUTES};
