//! Pulse shared types
//!
//! Domain types shared between the analytics engine, the daemon, and the
//! observability layer:
//! - Inbound metric records
//! - Engine snapshots served by the analytics endpoint
//! - Anomaly reports emitted on anomalous classifications

pub mod metric;
pub mod snapshot;

pub use metric::MetricRecord;
pub use snapshot::{AnomalyReport, EngineSnapshot};
