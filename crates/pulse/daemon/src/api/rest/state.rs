//! Application state for API handlers

use crate::pipeline::PipelineHandle;
use crate::store::MetricStore;
use prometheus::Registry;
use pulse_engine::AnalyticsEngine;
use pulse_observability::ServiceMetrics;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analytics engine
    pub engine: Arc<AnalyticsEngine>,

    /// Metric store backend
    pub store: Arc<dyn MetricStore>,

    /// Ingestion pipeline handle
    pub pipeline: PipelineHandle,

    /// Prometheus collectors
    pub metrics: Arc<ServiceMetrics>,

    /// Prometheus registry backing the scrape endpoint
    pub registry: Arc<Registry>,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        engine: Arc<AnalyticsEngine>,
        store: Arc<dyn MetricStore>,
        pipeline: PipelineHandle,
        metrics: Arc<ServiceMetrics>,
        registry: Arc<Registry>,
    ) -> Self {
        Self {
            engine,
            store,
            pipeline,
            metrics,
            registry,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let secs = (chrono::Utc::now() - self.started_at).num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        }
    }
}
