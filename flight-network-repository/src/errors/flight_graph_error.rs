//! Flight graph error types.
//!
//! A single error type is shared by the `FlightGraphProvider` backends and the
//! `FlightGraphService`, so that callers map failures to responses in one place.

use thiserror::Error;

/// Unified errors from flight graph operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlightGraphError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A create would violate a uniqueness rule.
    #[error("{0}")]
    DuplicateEntity(String),

    /// The query was valid but produced nothing meaningful.
    #[error("{0}")]
    EmptyResult(String),

    /// The backing store is unreachable or rejected the query.
    #[error("{0}")]
    StorageFailure(String),
}

impl FlightGraphError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a duplicate entity error.
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::DuplicateEntity(msg.into())
    }

    /// Create an empty result error.
    pub fn empty_result(msg: impl Into<String>) -> Self {
        Self::EmptyResult(msg.into())
    }

    /// Create a storage failure error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Create an invalid input error for a required field that was not supplied.
    pub fn missing_field(field: &str) -> Self {
        Self::InvalidInput(format!("Mandatory attribute '{}' is missing", field))
    }

    /// Whether this error was caused by the caller rather than the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::StorageFailure(_))
    }
}

impl From<neo4rs::Error> for FlightGraphError {
    fn from(err: neo4rs::Error) -> Self {
        Self::StorageFailure(err.to_string())
    }
}

impl From<neo4rs::DeError> for FlightGraphError {
    fn from(err: neo4rs::DeError) -> Self {
        Self::StorageFailure(format!("Failed to decode row: {}", err))
    }
}
