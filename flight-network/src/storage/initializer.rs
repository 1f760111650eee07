// Graph provider initialization
use anyhow::{Context, Result};
use flight_network_repository::{FlightGraphProvider, InMemoryFlightGraph, Neo4jFlightGraph};
use tracing::{info, warn};

use crate::config::{StorageBackend, StorageConfig};

/// Build the flight graph provider selected by the configuration
pub fn initialize_provider(config: &StorageConfig) -> Result<Box<dyn FlightGraphProvider>> {
    match config.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory flight graph, data will not survive a restart");
            Ok(Box::new(InMemoryFlightGraph::new()))
        }
        StorageBackend::Neo4j => {
            let provider = Neo4jFlightGraph::connect(
                &config.neo4j_uri,
                &config.neo4j_user,
                &config.neo4j_password,
            )
            .context("Failed to initialize Neo4j provider")?;
            info!("Neo4j provider initialized successfully");
            Ok(Box::new(provider))
        }
    }
}
