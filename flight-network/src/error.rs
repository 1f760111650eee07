// Mapping of flight graph errors to HTTP responses
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flight_network_repository::FlightGraphError;
use tracing::{error, warn};

use crate::models::MessageResponse;

/// Error returned by every handler. Renders as `{"message": ...}`.
#[derive(Debug)]
pub struct ApiError(pub FlightGraphError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            FlightGraphError::InvalidInput(_) | FlightGraphError::DuplicateEntity(_) => {
                StatusCode::BAD_REQUEST
            }
            FlightGraphError::NotFound(_) | FlightGraphError::EmptyResult(_) => {
                StatusCode::NOT_FOUND
            }
            FlightGraphError::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FlightGraphError> for ApiError {
    fn from(err: FlightGraphError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_error() {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        } else {
            error!(status = status.as_u16(), error = %self.0, "Storage failure");
        }

        (status, Json(MessageResponse::new(self.0.to_string()))).into_response()
    }
}
