// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use flight_network_repository::FlightGraphService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use self::state::AppState;

/// Create the Axum application router with all routes and middleware
pub fn create_app(service: FlightGraphService, cors: CorsLayer) -> Router {
    let state = AppState {
        service: Arc::new(service),
    };

    Router::new()
        .route(
            "/cities",
            put(handlers::register_city).get(handlers::list_cities),
        )
        .route("/cities/:name", get(handlers::get_city))
        .route(
            "/cities/:name/airports",
            put(handlers::register_airport).get(handlers::list_airports_in_city),
        )
        .route("/airports/:code", get(handlers::get_airport))
        .route("/flights", put(handlers::register_flight))
        .route("/flights/:number", get(handlers::get_flight))
        .route(
            "/search/flights/:from_city/:to_city",
            get(handlers::find_flights),
        )
        .route("/cleanup", post(handlers::cleanup))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the server on the specified address until Ctrl-C is received
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);
    info!("- Cities endpoint: http://{}/cities", addr);
    info!("- Search endpoint: http://{}/search/flights/{{from}}/{{to}}", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
