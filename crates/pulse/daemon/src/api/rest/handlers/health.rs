//! Health handler

use crate::api::rest::state::AppState;
use axum::http::StatusCode;
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: String,
    pub uptime: String,
}

/// Health check endpoint.
///
/// Unhealthy iff the metric store is unreachable; the engine itself is
/// in-memory and cannot fail.
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.store.len().await {
        Ok(_) => (StatusCode::OK, "healthy", "connected"),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "unhealthy",
            "disconnected",
        ),
    };

    (
        code,
        Json(HealthResponse {
            status,
            store,
            version: state.version.clone(),
            uptime: state.uptime(),
        }),
    )
}
