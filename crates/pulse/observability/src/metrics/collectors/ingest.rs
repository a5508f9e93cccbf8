//! Ingestion path metrics

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

/// Metrics for the metric submission path
pub struct IngestMetrics {
    /// Submissions by outcome
    pub ingest_total: IntCounterVec,

    /// Request handling duration by endpoint
    pub request_duration_seconds: HistogramVec,
}

impl IngestMetrics {
    /// Create and register ingestion metrics
    pub fn new(registry: &Registry) -> Self {
        let ingest_total = IntCounterVec::new(
            Opts::new("pulse_ingest_total", "Total metric submissions by outcome"),
            &["status"],
        )
        .expect("Failed to create pulse_ingest_total metric");
        registry
            .register(Box::new(ingest_total.clone()))
            .expect("Failed to register pulse_ingest_total");

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "pulse_request_duration_seconds",
                "Request handling duration",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["endpoint"],
        )
        .expect("Failed to create pulse_request_duration_seconds metric");
        registry
            .register(Box::new(request_duration_seconds.clone()))
            .expect("Failed to register pulse_request_duration_seconds");

        Self {
            ingest_total,
            request_duration_seconds,
        }
    }

    /// Record a submission accepted into the pipeline
    pub fn record_accepted(&self) {
        self.ingest_total.with_label_values(&["accepted"]).inc();
    }

    /// Record a submission rejected as malformed
    pub fn record_rejected(&self) {
        self.ingest_total.with_label_values(&["rejected"]).inc();
    }

    /// Record a submission dropped because the pipeline queue was full
    pub fn record_dropped(&self) {
        self.ingest_total.with_label_values(&["dropped"]).inc();
    }

    /// Observe request handling time for an endpoint
    pub fn observe_request(&self, endpoint: &str, duration_secs: f64) {
        self.request_duration_seconds
            .with_label_values(&[endpoint])
            .observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_are_counted_separately() {
        let registry = Registry::new();
        let metrics = IngestMetrics::new(&registry);

        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_rejected();
        metrics.record_dropped();
        metrics.observe_request("ingest", 0.002);

        assert_eq!(
            metrics.ingest_total.with_label_values(&["accepted"]).get(),
            2
        );
        assert_eq!(
            metrics.ingest_total.with_label_values(&["rejected"]).get(),
            1
        );
        assert_eq!(metrics.ingest_total.with_label_values(&["dropped"]).get(), 1);
    }
}
