//! REST API handlers

pub mod analytics;
pub mod health;
pub mod ingest;

pub use analytics::get_analytics;
pub use health::health_check;
pub use ingest::ingest_metric;
