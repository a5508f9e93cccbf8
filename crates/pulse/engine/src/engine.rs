//! Analytics engine: lock-protected window plus derived statistics

use crate::classifier::{classify, Classification};
use crate::window::SlidingWindow;
use parking_lot::RwLock;
use pulse_types::{AnomalyReport, EngineSnapshot};

/// Engine-owned mutable state, guarded as a single unit.
#[derive(Debug)]
struct EngineState {
    window: SlidingWindow,
    prediction: f64,
    mean: f64,
    std_dev: f64,
    total_count: u64,
    anomaly_count: u64,
    anomaly_rate: f64,
}

/// What a completed ingestion produced.
///
/// Returned so callers can update gauges and emit the anomaly diagnostic
/// after the engine lock has been released.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestOutcome {
    /// Rolling-average prediction after this sample
    pub prediction: f64,

    /// Anomaly rate (percent) after this sample
    pub anomaly_rate: f64,

    /// Window length after this sample
    pub window_len: usize,

    /// Present iff this sample was classified anomalous
    pub anomaly: Option<AnomalyReport>,
}

/// Streaming analytics over a sliding window of scalar samples.
///
/// Created once at service startup and shared behind an `Arc`; lives for
/// the process lifetime. `ingest` and `snapshot` are mutually exclusive
/// via one reader/writer lock; multiple snapshots may proceed together.
/// Lock hold time is bounded by the window size, and no I/O happens under
/// the lock.
///
/// Callers are expected to submit finite values; the ingestion boundary
/// rejects NaN and infinities before they reach the engine.
#[derive(Debug)]
pub struct AnalyticsEngine {
    z_threshold: f64,
    state: RwLock<EngineState>,
}

impl AnalyticsEngine {
    /// Create an engine with an empty window and zeroed statistics.
    pub fn new(window_size: usize, z_threshold: f64) -> Self {
        Self {
            z_threshold,
            state: RwLock::new(EngineState {
                window: SlidingWindow::new(window_size),
                prediction: 0.0,
                mean: 0.0,
                std_dev: 0.0,
                total_count: 0,
                anomaly_count: 0,
                anomaly_rate: 0.0,
            }),
        }
    }

    /// Ingest one sample, updating the window and all derived statistics.
    ///
    /// The prediction is recomputed on every call. Mean and standard
    /// deviation are only recomputed once the window has reached capacity;
    /// from that point on the sample is also classified, and an anomalous
    /// classification increments the anomaly counter.
    pub fn ingest(&self, value: f64) -> IngestOutcome {
        let mut state = self.state.write();

        state.window.push(value);

        // Rolling average over the current contents, full or not.
        let len = state.window.len() as f64;
        let prediction = state.window.iter().sum::<f64>() / len;
        state.prediction = prediction;

        let mut anomaly = None;
        if state.window.is_full() {
            let mean = prediction;
            let variance = state
                .window
                .iter()
                .map(|v| (v - mean) * (v - mean))
                .sum::<f64>()
                / len;
            state.mean = mean;
            state.std_dev = variance.sqrt();

            let Classification { is_anomaly, z_score } =
                classify(value, state.mean, state.std_dev, self.z_threshold);
            if is_anomaly {
                state.anomaly_count += 1;
                anomaly = Some(AnomalyReport {
                    value,
                    z_score,
                    mean: state.mean,
                    std_dev: state.std_dev,
                });
            }
        }

        state.total_count += 1;
        state.anomaly_rate = state.anomaly_count as f64 / state.total_count as f64 * 100.0;

        IngestOutcome {
            prediction: state.prediction,
            anomaly_rate: state.anomaly_rate,
            window_len: state.window.len(),
            anomaly,
        }
    }

    /// Read-only copy of the engine state.
    pub fn snapshot(&self) -> EngineSnapshot {
        let state = self.state.read();
        EngineSnapshot {
            prediction: state.prediction,
            window_size: state.window.len(),
            total_metrics: state.total_count,
            anomaly_count: state.anomaly_count,
            anomaly_rate: state.anomaly_rate,
            mean: state.mean,
            std_dev: state.std_dev,
            current_window: state.window.snapshot(),
        }
    }

    /// Configured window capacity
    pub fn window_capacity(&self) -> usize {
        self.state.read().window.capacity()
    }

    /// Configured z-score threshold
    pub fn z_threshold(&self) -> f64 {
        self.z_threshold
    }
}
