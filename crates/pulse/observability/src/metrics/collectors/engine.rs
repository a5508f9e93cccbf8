//! Analytics engine metrics

use prometheus::{Gauge, IntCounter, IntGauge, Opts, Registry};
use pulse_engine::IngestOutcome;

/// Gauges and counters mirroring the engine's derived values.
///
/// Applied from completed ingest outcomes, outside the engine lock. These
/// observe the engine; they never feed back into it.
pub struct EngineMetrics {
    /// Total anomalous classifications
    pub anomalies_total: IntCounter,

    /// Current anomaly rate (percent)
    pub anomaly_rate: Gauge,

    /// Current rolling-average prediction
    pub prediction_value: Gauge,

    /// Samples currently in the window
    pub window_fill: IntGauge,
}

impl EngineMetrics {
    /// Create and register engine metrics
    pub fn new(registry: &Registry) -> Self {
        let anomalies_total = IntCounter::with_opts(Opts::new(
            "pulse_anomalies_total",
            "Total number of detected anomalies",
        ))
        .expect("Failed to create pulse_anomalies_total metric");
        registry
            .register(Box::new(anomalies_total.clone()))
            .expect("Failed to register pulse_anomalies_total");

        let anomaly_rate = Gauge::with_opts(Opts::new(
            "pulse_anomaly_rate",
            "Current anomaly rate in percent",
        ))
        .expect("Failed to create pulse_anomaly_rate metric");
        registry
            .register(Box::new(anomaly_rate.clone()))
            .expect("Failed to register pulse_anomaly_rate");

        let prediction_value = Gauge::with_opts(Opts::new(
            "pulse_prediction_value",
            "Predicted next value from the rolling average",
        ))
        .expect("Failed to create pulse_prediction_value metric");
        registry
            .register(Box::new(prediction_value.clone()))
            .expect("Failed to register pulse_prediction_value");

        let window_fill = IntGauge::with_opts(Opts::new(
            "pulse_window_fill",
            "Samples currently held in the sliding window",
        ))
        .expect("Failed to create pulse_window_fill metric");
        registry
            .register(Box::new(window_fill.clone()))
            .expect("Failed to register pulse_window_fill");

        Self {
            anomalies_total,
            anomaly_rate,
            prediction_value,
            window_fill,
        }
    }

    /// Apply a completed ingest outcome to the gauges and counters
    pub fn apply_outcome(&self, outcome: &IngestOutcome) {
        self.prediction_value.set(outcome.prediction);
        self.anomaly_rate.set(outcome.anomaly_rate);
        self.window_fill.set(outcome.window_len as i64);
        if outcome.anomaly.is_some() {
            self.anomalies_total.inc();
        }
    }
}
