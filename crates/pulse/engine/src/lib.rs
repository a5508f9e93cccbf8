//! Pulse analytics engine
//!
//! The streaming core of Pulse:
//! - A fixed-capacity sliding window over the most recent samples
//! - Online recomputation of rolling average, mean, and standard deviation
//! - Z-score anomaly classification against a fixed threshold
//!
//! The engine is safe for true parallel invocation: `ingest` takes the
//! exclusive side and `snapshot` the shared side of one reader/writer
//! lock. No I/O happens under the lock; `ingest` hands everything a
//! caller needs for logging and telemetry back in its return value.

pub mod classifier;
pub mod engine;
pub mod window;

pub use classifier::{classify, Classification, DEFAULT_Z_THRESHOLD};
pub use engine::{AnalyticsEngine, IngestOutcome};
pub use window::SlidingWindow;
