//! Metric submission handler

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use crate::pipeline::SubmitError;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use pulse_types::MetricRecord;
use serde::Serialize;
use std::time::Instant;

/// Submission acknowledgement
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Accept a metric submission.
///
/// The record is validated and queued; the response does not wait for the
/// engine. Non-finite values are rejected here so they never reach the
/// window (NaN and infinities would poison every downstream statistic).
pub async fn ingest_metric(
    State(state): State<AppState>,
    payload: Result<Json<MetricRecord>, JsonRejection>,
) -> ApiResult<Json<IngestResponse>> {
    let started = Instant::now();

    let Json(mut record) = payload.map_err(|rejection| {
        state.metrics.ingest.record_rejected();
        ApiError::BadRequest(rejection.body_text())
    })?;

    if !record.is_finite() {
        state.metrics.ingest.record_rejected();
        return Err(ApiError::BadRequest(
            "metric fields must be finite numbers".to_string(),
        ));
    }

    if record.timestamp == 0 {
        record.timestamp = chrono::Utc::now().timestamp();
    }

    match state.pipeline.submit(record) {
        Ok(()) => {}
        Err(SubmitError::QueueFull) => {
            state.metrics.ingest.record_dropped();
            return Err(ApiError::Overloaded("ingestion queue is full".to_string()));
        }
        Err(SubmitError::Closed) => {
            return Err(ApiError::Internal(
                "ingestion pipeline has stopped".to_string(),
            ));
        }
    }

    state.metrics.ingest.record_accepted();
    state
        .metrics
        .ingest
        .observe_request("ingest", started.elapsed().as_secs_f64());

    Ok(Json(IngestResponse {
        status: "ok",
        message: "metric accepted",
    }))
}
