//! Engine snapshot and anomaly report types

use serde::{Deserialize, Serialize};

/// Read-only view of the analytics engine state.
///
/// Always reflects the result of some completed ingestion (or the initial
/// zero state), never an interleaving of two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Rolling-average prediction over the current window
    pub prediction: f64,

    /// Number of samples currently in the window
    pub window_size: usize,

    /// Total samples ever ingested
    pub total_metrics: u64,

    /// Total samples classified anomalous
    pub anomaly_count: u64,

    /// Anomalies as a percentage of total samples
    pub anomaly_rate: f64,

    /// Population mean over the window (last computed at full capacity)
    pub mean: f64,

    /// Population standard deviation over the window (last computed at full capacity)
    pub std_dev: f64,

    /// Window contents in insertion order
    pub current_window: Vec<f64>,
}

impl EngineSnapshot {
    /// The initial zero state of a fresh engine
    pub fn zero() -> Self {
        Self {
            prediction: 0.0,
            window_size: 0,
            total_metrics: 0,
            anomaly_count: 0,
            anomaly_rate: 0.0,
            mean: 0.0,
            std_dev: 0.0,
            current_window: Vec::new(),
        }
    }
}

/// Diagnostic record emitted when a sample is classified anomalous
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// The anomalous sample value
    pub value: f64,

    /// Standard deviations from the window mean
    pub z_score: f64,

    /// Window mean at classification time
    pub mean: f64,

    /// Window standard deviation at classification time
    pub std_dev: f64,
}
