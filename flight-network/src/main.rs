use anyhow::{Context, Result};
use flight_network::{
    config::{AppConfig, LogFormat},
    server, storage,
};
use flight_network_repository::FlightGraphService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment and logging
    dotenv::dotenv().ok();

    let log_format = LogFormat::from_env().context("Invalid LOG_FORMAT")?;
    init_tracing(log_format);

    let config = AppConfig::from_env().context("Invalid configuration")?;

    info!("Starting flight network service...");

    let provider = storage::initialize_provider(&config.storage)?;
    let service = FlightGraphService::new(provider);
    service
        .initialize()
        .await
        .context("Failed to prepare the flight graph store")?;

    let app = server::create_app(service, config.cors_layer()?);
    server::run_server(app, config.server_addr()).await
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .compact()
            .init(),
    }
}
