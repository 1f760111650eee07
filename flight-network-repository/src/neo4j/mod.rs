//! Neo4j implementation of the flight graph provider.
//!
//! Cities, airports and flights are stored as `City`, `Airport` and `Flight`
//! nodes joined by `HAS_AIRPORT`, `HAS_FLIGHT` and `GOES_TO` relationships.

mod provider;
mod queries;
mod schema;

pub use provider::Neo4jFlightGraph;
