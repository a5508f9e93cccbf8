//! Error types for pulse-daemon

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Daemon-level errors
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Metric store errors.
///
/// The in-memory backend cannot fail, but the trait is the seam a
/// networked backend plugs into, and those can.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum StoreError {
    /// Backend unreachable
    #[error("Connection error: {0}")]
    Connection(String),

    /// Backend rejected or corrupted the record
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// API-specific errors
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum ApiError {
    /// Malformed or non-finite submission
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Ingestion queue is full
    #[error("Overloaded: {0}")]
    Overloaded(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Overloaded(_) => (StatusCode::SERVICE_UNAVAILABLE, "OVERLOADED"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;

/// Result alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_map_to_expected_status() {
        let cases = [
            (
                ApiError::BadRequest("nan".into()).into_response().status(),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Overloaded("queue full".into())
                    .into_response()
                    .status(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ApiError::Internal("boom".into()).into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (actual, expected) in cases {
            assert_eq!(actual, expected);
        }
    }
}
