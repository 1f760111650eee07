// App state for Axum server
use std::sync::Arc;

use flight_network_repository::FlightGraphService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FlightGraphService>,
}
