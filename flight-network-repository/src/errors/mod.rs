//! Error types for flight graph operations.

mod flight_graph_error;

pub use flight_graph_error::FlightGraphError;
