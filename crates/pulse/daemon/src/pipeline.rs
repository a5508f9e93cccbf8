//! Bounded ingestion pipeline
//!
//! The HTTP layer hands accepted submissions to a bounded queue drained by
//! a fixed pool of worker tasks. Each worker persists the raw record to
//! the store (best-effort), feeds the scalar into the analytics engine,
//! and then applies the outcome to the Prometheus collectors and emits the
//! anomaly diagnostic, both outside the engine lock. A full queue rejects
//! the submission instead of growing unbounded in-flight work.

use crate::config::PipelineConfig;
use crate::store::MetricStore;
use pulse_engine::AnalyticsEngine;
use pulse_observability::ServiceMetrics;
use pulse_types::MetricRecord;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Why a submission could not be queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Queue is at capacity
    QueueFull,
    /// All workers have shut down
    Closed,
}

/// Cloneable submission handle held by the HTTP layer
#[derive(Clone)]
pub struct PipelineHandle {
    tx: mpsc::Sender<MetricRecord>,
}

impl PipelineHandle {
    /// Queue a record for ingestion without waiting for it to be processed
    pub fn submit(&self, record: MetricRecord) -> Result<(), SubmitError> {
        self.tx.try_send(record).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => SubmitError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => SubmitError::Closed,
        })
    }
}

/// Spawn the worker pool and return the submission handle.
///
/// Workers exit when every handle has been dropped and the queue drains.
pub fn spawn(
    config: &PipelineConfig,
    engine: Arc<AnalyticsEngine>,
    store: Arc<dyn MetricStore>,
    metrics: Arc<ServiceMetrics>,
) -> PipelineHandle {
    let (tx, rx) = mpsc::channel::<MetricRecord>(config.queue_capacity);
    let rx = Arc::new(Mutex::new(rx));

    for worker_id in 0..config.workers {
        let rx = rx.clone();
        let engine = engine.clone();
        let store = store.clone();
        let metrics = metrics.clone();

        tokio::spawn(async move {
            tracing::debug!(worker_id, "ingestion worker started");
            loop {
                let record = { rx.lock().await.recv().await };
                match record {
                    Some(record) => {
                        process(&engine, store.as_ref(), &metrics, record).await;
                    }
                    None => break,
                }
            }
            tracing::debug!(worker_id, "ingestion worker stopped");
        });
    }

    PipelineHandle { tx }
}

/// Ingest one record: persist, analyze, then observe.
async fn process(
    engine: &AnalyticsEngine,
    store: &dyn MetricStore,
    metrics: &ServiceMetrics,
    record: MetricRecord,
) {
    if let Err(err) = store.put(record.clone()).await {
        metrics.store.write_failures_total.inc();
        tracing::warn!(error = %err, timestamp = record.timestamp, "failed to persist metric");
    }

    let outcome = engine.ingest(record.rps);
    metrics.engine.apply_outcome(&outcome);

    if let Some(report) = &outcome.anomaly {
        tracing::warn!(
            value = report.value,
            z_score = report.z_score,
            mean = report.mean,
            std_dev = report.std_dev,
            "anomaly detected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::store::InMemoryStore;
    use prometheus::Registry;
    use std::time::Duration;

    fn fixtures() -> (Arc<AnalyticsEngine>, Arc<InMemoryStore>, Arc<ServiceMetrics>) {
        (
            Arc::new(AnalyticsEngine::new(50, 2.0)),
            Arc::new(InMemoryStore::new(Duration::from_secs(60))),
            Arc::new(ServiceMetrics::new(&Registry::new())),
        )
    }

    async fn wait_for_total(engine: &AnalyticsEngine, expected: u64) {
        for _ in 0..100 {
            if engine.snapshot().total_metrics >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!(
            "engine never reached {expected} samples (got {})",
            engine.snapshot().total_metrics
        );
    }

    #[tokio::test]
    async fn submitted_record_reaches_engine_and_store() {
        let (engine, store, metrics) = fixtures();
        let config = PipelineConfig {
            queue_capacity: 8,
            workers: 2,
        };
        let handle = spawn(&config, engine.clone(), store.clone(), metrics);

        handle
            .submit(MetricRecord::new(42, 10.0, 120.0))
            .expect("queue should accept");

        wait_for_total(&engine, 1).await;
        assert_eq!(engine.snapshot().current_window, vec![120.0]);
        assert!(store.get(42).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn full_queue_rejects_submissions() {
        let (engine, store, metrics) = fixtures();
        // No workers: nothing drains the queue.
        let config = PipelineConfig {
            queue_capacity: 1,
            workers: 0,
        };
        let handle = spawn(&config, engine, store, metrics);

        assert!(handle.submit(MetricRecord::new(1, 0.0, 1.0)).is_ok());
        assert_eq!(
            handle.submit(MetricRecord::new(2, 0.0, 2.0)),
            Err(SubmitError::QueueFull)
        );
    }

    #[tokio::test]
    async fn anomaly_outcome_updates_counters() {
        let (engine, store, metrics) = fixtures();
        let config = PipelineConfig {
            queue_capacity: 128,
            workers: 1,
        };
        let handle = spawn(&config, engine.clone(), store, metrics.clone());

        for i in 0..50 {
            let rps = if i % 2 == 0 { 100.0 } else { 110.0 };
            handle.submit(MetricRecord::new(i, 0.0, rps)).unwrap();
        }
        handle.submit(MetricRecord::new(50, 0.0, 300.0)).unwrap();

        wait_for_total(&engine, 51).await;
        assert_eq!(metrics.engine.anomalies_total.get(), 1);
        assert!(metrics.engine.anomaly_rate.get() > 0.0);
    }
}
