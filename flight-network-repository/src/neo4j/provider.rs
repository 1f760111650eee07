//! Neo4j flight graph provider.

use async_trait::async_trait;
use flight_network_shared::{
    Airport, AirportDetails, City, FlightDetails, NewAirport, NewCity, NewFlight, Route,
};
use neo4rs::{Graph, Query, Row};
use tracing::{debug, info};

use crate::errors::FlightGraphError;
use crate::interfaces::{FlightGraphProvider, InsertOutcome};
use crate::neo4j::{queries, schema};

/// Neo4j error code raised when a write violates a uniqueness constraint.
const CONSTRAINT_VIOLATION: &str = "ConstraintValidationFailed";

/// Flight graph stored in Neo4j and queried with Cypher over Bolt.
///
/// # Example
///
/// ```ignore
/// use flight_network_repository::Neo4jFlightGraph;
///
/// let provider = Neo4jFlightGraph::connect("127.0.0.1:7687", "neo4j", "secret")?;
/// provider.ensure_schema().await?;
/// ```
#[derive(Clone)]
pub struct Neo4jFlightGraph {
    graph: Graph,
}

impl Neo4jFlightGraph {
    /// Connect to Neo4j at `uri` with the given credentials.
    pub fn connect(uri: &str, user: &str, password: &str) -> Result<Self, FlightGraphError> {
        info!(uri = %uri, "Connecting to Neo4j");
        let graph = Graph::new(uri, user, password)
            .map_err(|e| FlightGraphError::storage(format!("Failed to connect to Neo4j: {}", e)))?;

        Ok(Self { graph })
    }

    /// Run a query and collect every returned row.
    async fn fetch_all(&self, query: Query) -> Result<Vec<Row>, FlightGraphError> {
        let mut result = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = result.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Run a query that is expected to return at most one row.
    async fn fetch_one(&self, query: Query) -> Result<Option<Row>, FlightGraphError> {
        let mut result = self.graph.execute(query).await?;
        Ok(result.next().await?)
    }
}

fn city_from_row(row: &Row) -> Result<City, FlightGraphError> {
    Ok(City {
        name: row.get("name")?,
        country: row.get("country")?,
    })
}

fn airport_from_row(row: &Row) -> Result<Airport, FlightGraphError> {
    Ok(Airport {
        code: row.get("code")?,
        name: row.get("name")?,
        number_of_terminals: row.get("number_of_terminals")?,
        address: row.get("address")?,
    })
}

fn flight_from_row(row: &Row) -> Result<FlightDetails, FlightGraphError> {
    Ok(FlightDetails {
        number: row.get("number")?,
        from_airport: row.get("from_airport")?,
        from_city: row.get("from_city")?,
        to_airport: row.get("to_airport")?,
        to_city: row.get("to_city")?,
        price: row.get("price")?,
        flight_time_in_minutes: row.get("flight_time_in_minutes")?,
        operator: row.get("operator")?,
    })
}

fn route_from_row(row: &Row) -> Result<Route, FlightGraphError> {
    let flight_numbers: Vec<String> = row.get("flight_numbers")?;
    let flight_number = flight_numbers
        .first()
        .cloned()
        .ok_or_else(|| FlightGraphError::storage("Route search returned a path without flights"))?;
    let stop_count = flight_numbers.len() - 1;

    Ok(Route {
        flight_number,
        flight_numbers,
        from_airport: row.get("from_airport")?,
        to_airport: row.get("to_airport")?,
        aggregate_price: row.get("aggregate_price")?,
        aggregate_flight_time: row.get("aggregate_flight_time")?,
        stop_count,
    })
}

fn is_constraint_violation(err: &neo4rs::Error) -> bool {
    err.to_string().contains(CONSTRAINT_VIOLATION)
}

#[async_trait]
impl FlightGraphProvider for Neo4jFlightGraph {
    async fn ensure_schema(&self) -> Result<(), FlightGraphError> {
        schema::create_indexes_and_constraints(&self.graph).await
    }

    async fn insert_city(&self, city: &NewCity) -> Result<InsertOutcome, FlightGraphError> {
        let query = Query::new(queries::INSERT_CITY.to_string())
            .param("name", city.name.clone())
            .param("country", city.country.clone());

        let row = self
            .fetch_one(query)
            .await?
            .ok_or_else(|| FlightGraphError::storage("City insert returned no result"))?;
        let created: bool = row.get("created")?;

        Ok(if created {
            InsertOutcome::Created
        } else {
            InsertOutcome::Duplicate
        })
    }

    async fn list_cities(&self, country: Option<&str>) -> Result<Vec<City>, FlightGraphError> {
        let query = Query::new(queries::LIST_CITIES.to_string())
            .param("country", country.map(str::to_string));

        self.fetch_all(query).await?.iter().map(city_from_row).collect()
    }

    async fn find_city(&self, name: &str) -> Result<Option<City>, FlightGraphError> {
        let query = Query::new(queries::FIND_CITY.to_string()).param("name", name);

        self.fetch_one(query)
            .await?
            .as_ref()
            .map(city_from_row)
            .transpose()
    }

    async fn insert_airport(
        &self,
        city_name: &str,
        airport: &NewAirport,
    ) -> Result<InsertOutcome, FlightGraphError> {
        let query = Query::new(queries::INSERT_AIRPORT.to_string())
            .param("city_name", city_name)
            .param("code", airport.code.clone())
            .param("name", airport.name.clone())
            .param("number_of_terminals", airport.number_of_terminals)
            .param("address", airport.address.clone());

        // A concurrent insert of the same code slips past the count check but
        // trips the uniqueness constraint, which is reported as a duplicate.
        let mut result = match self.graph.execute(query).await {
            Ok(result) => result,
            Err(e) if is_constraint_violation(&e) => return Ok(InsertOutcome::Duplicate),
            Err(e) => return Err(e.into()),
        };
        let row = match result.next().await {
            Ok(row) => row,
            Err(e) if is_constraint_violation(&e) => return Ok(InsertOutcome::Duplicate),
            Err(e) => return Err(e.into()),
        };
        let row =
            row.ok_or_else(|| FlightGraphError::storage("Airport insert returned no result"))?;

        let city_found: bool = row.get("city_found")?;
        let duplicate: bool = row.get("duplicate")?;

        Ok(match (city_found, duplicate) {
            (false, _) => InsertOutcome::MissingParent,
            (true, true) => InsertOutcome::Duplicate,
            (true, false) => InsertOutcome::Created,
        })
    }

    async fn list_airports(&self, city_name: &str) -> Result<Vec<Airport>, FlightGraphError> {
        let query = Query::new(queries::LIST_AIRPORTS.to_string()).param("city_name", city_name);

        self.fetch_all(query)
            .await?
            .iter()
            .map(airport_from_row)
            .collect()
    }

    async fn find_airport(&self, code: &str) -> Result<Option<AirportDetails>, FlightGraphError> {
        let query = Query::new(queries::FIND_AIRPORT.to_string()).param("code", code);

        let Some(row) = self.fetch_one(query).await? else {
            return Ok(None);
        };
        let city: String = row.get("city")?;
        Ok(Some(AirportDetails::new(airport_from_row(&row)?, city)))
    }

    async fn insert_flight(&self, flight: &NewFlight) -> Result<InsertOutcome, FlightGraphError> {
        let query = Query::new(queries::INSERT_FLIGHT.to_string())
            .param("number", flight.number.clone())
            .param("from_airport", flight.from_airport.clone())
            .param("to_airport", flight.to_airport.clone())
            .param("price", flight.price)
            .param("flight_time_in_minutes", flight.flight_time_in_minutes)
            .param("operator", flight.operator.clone());

        let row = self
            .fetch_one(query)
            .await?
            .ok_or_else(|| FlightGraphError::storage("Flight insert returned no result"))?;
        let created: bool = row.get("created")?;

        Ok(if created {
            InsertOutcome::Created
        } else {
            InsertOutcome::MissingParent
        })
    }

    async fn find_flight(&self, number: &str) -> Result<Option<FlightDetails>, FlightGraphError> {
        let query = Query::new(queries::FIND_FLIGHT.to_string()).param("number", number);

        self.fetch_one(query)
            .await?
            .as_ref()
            .map(flight_from_row)
            .transpose()
    }

    async fn find_routes(
        &self,
        from_city: &str,
        to_city: &str,
        max_segments: usize,
    ) -> Result<Vec<Route>, FlightGraphError> {
        if max_segments == 0 {
            return Ok(Vec::new());
        }

        let query = Query::new(queries::find_routes(max_segments))
            .param("from_city", from_city)
            .param("to_city", to_city);

        let routes = self
            .fetch_all(query)
            .await?
            .iter()
            .map(route_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            from_city = %from_city,
            to_city = %to_city,
            routes = routes.len(),
            "Enumerated Neo4j routes"
        );
        Ok(routes)
    }

    async fn clear(&self) -> Result<(), FlightGraphError> {
        self.graph
            .run(Query::new(queries::CLEAR_GRAPH.to_string()))
            .await
            .map_err(|e| FlightGraphError::storage(format!("Failed to clear Neo4j data: {}", e)))
    }
}
