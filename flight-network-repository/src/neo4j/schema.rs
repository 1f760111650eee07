// Neo4j index and constraint creation
use neo4rs::{Graph, Query};
use tracing::{info, warn};

use crate::errors::FlightGraphError;

const SCHEMA_STATEMENTS: &[(&str, &str)] = &[
    (
        "unique constraint on Airport.code",
        "CREATE CONSTRAINT airport_code_unique IF NOT EXISTS FOR (a:Airport) REQUIRE a.code IS UNIQUE",
    ),
    (
        "index on City.name",
        "CREATE INDEX city_name_index IF NOT EXISTS FOR (c:City) ON (c.name)",
    ),
    (
        "index on City.country",
        "CREATE INDEX city_country_index IF NOT EXISTS FOR (c:City) ON (c.country)",
    ),
    (
        "index on Flight.number",
        "CREATE INDEX flight_number_index IF NOT EXISTS FOR (f:Flight) ON (f.number)",
    ),
];

/// Create the indexes and constraints the flight graph queries rely on.
///
/// Failures are logged and skipped; the service still works without them,
/// only slower and without the airport code guarantee at the store level.
pub(crate) async fn create_indexes_and_constraints(graph: &Graph) -> Result<(), FlightGraphError> {
    for (description, statement) in SCHEMA_STATEMENTS {
        info!("Creating {}...", description);
        match graph.run(Query::new(statement.to_string())).await {
            Ok(_) => info!("✓ Created {}", description),
            Err(e) => warn!("Failed to create {} (may already exist): {}", description, e),
        }
    }

    Ok(())
}
