//! Metrics collection and export for Pulse
//!
//! Provides Prometheus-compatible metrics for the ingestion path, the
//! analytics engine, and the metric store.

pub mod collectors;
pub mod exporter;

pub use collectors::{EngineMetrics, IngestMetrics, ServiceMetrics, StoreMetrics};
pub use exporter::export_metrics;
