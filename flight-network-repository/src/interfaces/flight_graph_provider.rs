//! Flight graph provider trait definition.
//!
//! This module defines the storage primitives the `FlightGraphService` is built
//! on, allowing the graph to live in Neo4j or in process memory.

use async_trait::async_trait;
use flight_network_shared::{
    Airport, AirportDetails, City, FlightDetails, NewAirport, NewCity, NewFlight, Route,
};

use crate::errors::FlightGraphError;

/// Result of a conditional create.
///
/// Creates run the existence checks and the write as one store operation, so
/// the outcome reports which precondition (if any) stopped the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The node and its edges were created.
    Created,
    /// An entity with the same unique key already exists.
    Duplicate,
    /// A node the new entity must be attached to does not exist.
    MissingParent,
}

/// Abstracts the property graph store holding cities, airports and flights.
///
/// Implementations perform no input validation; that is the service's job.
/// Lookups by city name return the first match when several cities share the
/// name.
#[async_trait]
pub trait FlightGraphProvider: Send + Sync {
    /// Create any indexes and constraints the backend relies on.
    ///
    /// Called once at startup. Must be idempotent.
    async fn ensure_schema(&self) -> Result<(), FlightGraphError>;

    /// Create a city unless one with the same name and country exists.
    ///
    /// Returns `Created` or `Duplicate`.
    async fn insert_city(&self, city: &NewCity) -> Result<InsertOutcome, FlightGraphError>;

    /// List cities, optionally restricted to an exact country.
    async fn list_cities(&self, country: Option<&str>) -> Result<Vec<City>, FlightGraphError>;

    /// Find a city by name.
    async fn find_city(&self, name: &str) -> Result<Option<City>, FlightGraphError>;

    /// Create an airport owned by `city_name`.
    ///
    /// Returns `MissingParent` if the city does not exist and `Duplicate` if
    /// the airport code is already taken anywhere in the graph.
    async fn insert_airport(
        &self,
        city_name: &str,
        airport: &NewAirport,
    ) -> Result<InsertOutcome, FlightGraphError>;

    /// List the airports owned by a city. Unknown cities yield an empty list.
    async fn list_airports(&self, city_name: &str) -> Result<Vec<Airport>, FlightGraphError>;

    /// Find an airport by code, together with its owning city's name.
    async fn find_airport(&self, code: &str) -> Result<Option<AirportDetails>, FlightGraphError>;

    /// Create a flight between two existing airports.
    ///
    /// Returns `MissingParent` if either airport is unknown. Flight numbers are
    /// not unique, so this never returns `Duplicate`.
    async fn insert_flight(&self, flight: &NewFlight) -> Result<InsertOutcome, FlightGraphError>;

    /// Find the first flight with the given number, joined with its endpoints.
    async fn find_flight(&self, number: &str) -> Result<Option<FlightDetails>, FlightGraphError>;

    /// Enumerate every simple path of 1 to `max_segments` flights from an
    /// airport of `from_city` to an airport of `to_city`.
    ///
    /// Longer paths must not be expanded at all.
    async fn find_routes(
        &self,
        from_city: &str,
        to_city: &str,
        max_segments: usize,
    ) -> Result<Vec<Route>, FlightGraphError>;

    /// Delete every node and edge.
    async fn clear(&self) -> Result<(), FlightGraphError>;
}
