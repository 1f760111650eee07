//! In-memory implementation of the flight graph provider.
//!
//! Keeps the whole graph in process behind a lock. Used by tests and for
//! running the service locally without a Neo4j instance.

mod provider;
mod routes;

pub use provider::InMemoryFlightGraph;
