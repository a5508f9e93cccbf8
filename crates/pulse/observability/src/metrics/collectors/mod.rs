//! Metric collectors for Pulse components

pub mod engine;
pub mod ingest;
pub mod store;

use prometheus::Registry;

pub use engine::EngineMetrics;
pub use ingest::IngestMetrics;
pub use store::StoreMetrics;

/// All Pulse metrics combined
pub struct ServiceMetrics {
    /// Ingestion path metrics
    pub ingest: IngestMetrics,
    /// Analytics engine metrics
    pub engine: EngineMetrics,
    /// Metric store metrics
    pub store: StoreMetrics,
}

impl ServiceMetrics {
    /// Create all Pulse metrics and register them
    pub fn new(registry: &Registry) -> Self {
        Self {
            ingest: IngestMetrics::new(registry),
            engine: EngineMetrics::new(registry),
            store: StoreMetrics::new(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_collectors_register_without_conflict() {
        let registry = Registry::new();
        let metrics = ServiceMetrics::new(&registry);
        metrics.ingest.record_accepted();
        metrics.engine.anomalies_total.inc();
        metrics.store.set_entries(3);
        assert!(!registry.gather().is_empty());
    }
}
