//! Metric store backends
//!
//! Raw metric records are persisted with a time-to-live, off the ingest
//! critical path and best-effort: a store failure is logged and absorbed,
//! never surfaced through ingestion.

pub mod memory;
pub mod traits;

pub use memory::InMemoryStore;
pub use traits::MetricStore;
