//! Metric store metrics

use prometheus::{IntCounter, IntGauge, Opts, Registry};

/// Metrics for the TTL metric store
pub struct StoreMetrics {
    /// Records currently held (maintained by the sweeper)
    pub entries: IntGauge,

    /// Failed store writes (logged and absorbed on the ingest path)
    pub write_failures_total: IntCounter,
}

impl StoreMetrics {
    /// Create and register store metrics
    pub fn new(registry: &Registry) -> Self {
        let entries = IntGauge::with_opts(Opts::new(
            "pulse_store_entries",
            "Metric records currently held in the store",
        ))
        .expect("Failed to create pulse_store_entries metric");
        registry
            .register(Box::new(entries.clone()))
            .expect("Failed to register pulse_store_entries");

        let write_failures_total = IntCounter::with_opts(Opts::new(
            "pulse_store_write_failures_total",
            "Total failed metric store writes",
        ))
        .expect("Failed to create pulse_store_write_failures_total metric");
        registry
            .register(Box::new(write_failures_total.clone()))
            .expect("Failed to register pulse_store_write_failures_total");

        Self {
            entries,
            write_failures_total,
        }
    }

    /// Set the current record count
    pub fn set_entries(&self, count: i64) {
        self.entries.set(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_gauge_tracks_set_value() {
        let registry = Registry::new();
        let metrics = StoreMetrics::new(&registry);
        metrics.set_entries(42);
        assert_eq!(metrics.entries.get(), 42);
    }
}
