//! # Flight Network Repository
//!
//! This crate provides the storage layer of the flight network service: the
//! `FlightGraphProvider` trait, its Neo4j and in-memory implementations, and
//! the `FlightGraphService` that validates requests and orchestrates them
//! against a provider.

pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod neo4j;
pub mod service;

pub use errors::FlightGraphError;
pub use interfaces::{FlightGraphProvider, InsertOutcome};
pub use memory::InMemoryFlightGraph;
pub use neo4j::Neo4jFlightGraph;
pub use service::FlightGraphService;
