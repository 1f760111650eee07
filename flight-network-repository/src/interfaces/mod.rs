//! Abstract storage interface for the flight graph.

mod flight_graph_provider;

pub use flight_graph_provider::{FlightGraphProvider, InsertOutcome};
