//! Pulse daemon library
//!
//! Core components of the `pulsed` service:
//! - REST API (submission, analytics snapshot, health, Prometheus scrape)
//! - Bounded ingestion pipeline feeding the analytics engine
//! - TTL metric store
//! - Configuration and server lifecycle

pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod server;
pub mod store;

pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError, StoreError};
pub use server::Server;
pub use store::{InMemoryStore, MetricStore};
