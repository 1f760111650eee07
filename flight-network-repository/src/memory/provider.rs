//! In-memory flight graph provider.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use flight_network_shared::{
    Airport, AirportDetails, City, FlightDetails, NewAirport, NewCity, NewFlight, Route,
};
use tracing::debug;

use crate::errors::FlightGraphError;
use crate::interfaces::{FlightGraphProvider, InsertOutcome};
use crate::memory::routes::{find_paths, Adjacency, Segment};

/// An airport together with the index of the city that owns it.
#[derive(Debug, Clone)]
struct StoredAirport {
    city: usize,
    airport: Airport,
}

#[derive(Debug, Default)]
struct GraphData {
    cities: Vec<City>,
    airports: Vec<StoredAirport>,
    /// Airport code -> index into `airports`.
    airport_codes: HashMap<String, usize>,
    flights: Vec<NewFlight>,
}

impl GraphData {
    fn city_by_name(&self, name: &str) -> Option<usize> {
        self.cities.iter().position(|c| c.name == name)
    }

    fn airport(&self, code: &str) -> Option<&StoredAirport> {
        self.airport_codes.get(code).map(|&idx| &self.airports[idx])
    }

    fn city_of(&self, airport: &StoredAirport) -> &City {
        &self.cities[airport.city]
    }

    /// Codes of every airport owned by a city with the given name.
    fn airport_codes_in(&self, city_name: &str) -> Vec<&str> {
        self.airports
            .iter()
            .filter(|a| self.city_of(a).name == city_name)
            .map(|a| a.airport.code.as_str())
            .collect()
    }

    fn adjacency(&self) -> Adjacency<'_> {
        let mut adjacency: Adjacency = HashMap::new();
        for flight in &self.flights {
            adjacency
                .entry(flight.from_airport.as_str())
                .or_default()
                .push(Segment {
                    number: &flight.number,
                    to: &flight.to_airport,
                    price: flight.price,
                    minutes: flight.flight_time_in_minutes,
                });
        }
        adjacency
    }
}

/// Flight graph held entirely in memory.
///
/// Every mutation holds the write lock across its existence checks and the
/// insert, so concurrent creates with the same key cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryFlightGraph {
    data: RwLock<GraphData>,
}

impl InMemoryFlightGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, GraphData>, FlightGraphError> {
        self.data
            .read()
            .map_err(|_| FlightGraphError::storage("In-memory graph lock is poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, GraphData>, FlightGraphError> {
        self.data
            .write()
            .map_err(|_| FlightGraphError::storage("In-memory graph lock is poisoned"))
    }
}

#[async_trait]
impl FlightGraphProvider for InMemoryFlightGraph {
    async fn ensure_schema(&self) -> Result<(), FlightGraphError> {
        Ok(())
    }

    async fn insert_city(&self, city: &NewCity) -> Result<InsertOutcome, FlightGraphError> {
        let mut data = self.write()?;
        if data
            .cities
            .iter()
            .any(|c| c.name == city.name && c.country == city.country)
        {
            return Ok(InsertOutcome::Duplicate);
        }

        data.cities.push(city.clone().into());
        Ok(InsertOutcome::Created)
    }

    async fn list_cities(&self, country: Option<&str>) -> Result<Vec<City>, FlightGraphError> {
        let data = self.read()?;
        Ok(data
            .cities
            .iter()
            .filter(|c| country.map_or(true, |country| c.country == country))
            .cloned()
            .collect())
    }

    async fn find_city(&self, name: &str) -> Result<Option<City>, FlightGraphError> {
        let data = self.read()?;
        Ok(data.city_by_name(name).map(|idx| data.cities[idx].clone()))
    }

    async fn insert_airport(
        &self,
        city_name: &str,
        airport: &NewAirport,
    ) -> Result<InsertOutcome, FlightGraphError> {
        let mut data = self.write()?;
        let Some(city) = data.city_by_name(city_name) else {
            return Ok(InsertOutcome::MissingParent);
        };
        if data.airport_codes.contains_key(&airport.code) {
            return Ok(InsertOutcome::Duplicate);
        }

        let idx = data.airports.len();
        data.airports.push(StoredAirport {
            city,
            airport: airport.clone().into(),
        });
        data.airport_codes.insert(airport.code.clone(), idx);
        Ok(InsertOutcome::Created)
    }

    async fn list_airports(&self, city_name: &str) -> Result<Vec<Airport>, FlightGraphError> {
        let data = self.read()?;
        Ok(data
            .airports
            .iter()
            .filter(|a| data.city_of(a).name == city_name)
            .map(|a| a.airport.clone())
            .collect())
    }

    async fn find_airport(&self, code: &str) -> Result<Option<AirportDetails>, FlightGraphError> {
        let data = self.read()?;
        Ok(data.airport(code).map(|stored| {
            AirportDetails::new(stored.airport.clone(), data.city_of(stored).name.clone())
        }))
    }

    async fn insert_flight(&self, flight: &NewFlight) -> Result<InsertOutcome, FlightGraphError> {
        let mut data = self.write()?;
        if data.airport(&flight.from_airport).is_none() || data.airport(&flight.to_airport).is_none()
        {
            return Ok(InsertOutcome::MissingParent);
        }

        data.flights.push(flight.clone());
        Ok(InsertOutcome::Created)
    }

    async fn find_flight(&self, number: &str) -> Result<Option<FlightDetails>, FlightGraphError> {
        let data = self.read()?;
        let Some(flight) = data.flights.iter().find(|f| f.number == number) else {
            return Ok(None);
        };

        let (Some(from), Some(to)) = (
            data.airport(&flight.from_airport),
            data.airport(&flight.to_airport),
        ) else {
            return Ok(None);
        };

        Ok(Some(FlightDetails {
            number: flight.number.clone(),
            from_airport: from.airport.code.clone(),
            from_city: data.city_of(from).name.clone(),
            to_airport: to.airport.code.clone(),
            to_city: data.city_of(to).name.clone(),
            price: flight.price,
            flight_time_in_minutes: flight.flight_time_in_minutes,
            operator: flight.operator.clone(),
        }))
    }

    async fn find_routes(
        &self,
        from_city: &str,
        to_city: &str,
        max_segments: usize,
    ) -> Result<Vec<Route>, FlightGraphError> {
        let data = self.read()?;
        let origins = data.airport_codes_in(from_city);
        let destinations: HashSet<&str> = data.airport_codes_in(to_city).into_iter().collect();

        let routes = find_paths(&data.adjacency(), &origins, &destinations, max_segments);
        debug!(
            from_city = %from_city,
            to_city = %to_city,
            routes = routes.len(),
            "Enumerated in-memory routes"
        );
        Ok(routes)
    }

    async fn clear(&self) -> Result<(), FlightGraphError> {
        let mut data = self.write()?;
        *data = GraphData::default();
        Ok(())
    }
}
