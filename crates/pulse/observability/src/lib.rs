//! Pulse observability
//!
//! Prometheus-compatible metrics for the Pulse service: ingestion
//! counters, request latency histograms, and gauges mirroring the
//! analytics engine's derived values. The exporter publishes the shared
//! registry in text exposition format; the `http` feature adds an axum
//! handler for scraping.
//!
//! Nothing here participates in analytics correctness: the collectors
//! observe engine outcomes after the fact.

pub mod metrics;

pub use metrics::exporter::export_metrics;
pub use metrics::{EngineMetrics, IngestMetrics, ServiceMetrics, StoreMetrics};

#[cfg(feature = "http")]
pub use metrics::exporter::http::{metrics_handler, metrics_router, MetricsState};
