//! Analytics snapshot handler

use crate::api::rest::state::AppState;
use axum::{extract::State, Json};
use pulse_types::EngineSnapshot;
use std::time::Instant;

/// Serve the current engine snapshot.
///
/// The snapshot is taken under the engine's shared lock, so it always
/// reflects a completed ingestion, never a partial update.
pub async fn get_analytics(State(state): State<AppState>) -> Json<EngineSnapshot> {
    let started = Instant::now();

    let snapshot = state.engine.snapshot();

    state
        .metrics
        .ingest
        .observe_request("analyze", started.elapsed().as_secs_f64());

    Json(snapshot)
}
