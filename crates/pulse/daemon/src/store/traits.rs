//! Store trait definitions

use crate::error::StoreResult;
use async_trait::async_trait;
use pulse_types::MetricRecord;

/// Key-value persistence for raw metric records with a time-to-live.
///
/// Records are keyed by their unix timestamp, matching the submission
/// format. Expired records are unobservable through `get` even before the
/// sweeper physically removes them.
#[async_trait]
pub trait MetricStore: Send + Sync {
    /// Persist a record under its timestamp
    async fn put(&self, record: MetricRecord) -> StoreResult<()>;

    /// Fetch a live record by timestamp
    #[allow(dead_code)]
    async fn get(&self, timestamp: i64) -> StoreResult<Option<MetricRecord>>;

    /// Number of records currently held (including not-yet-swept expired ones)
    async fn len(&self) -> StoreResult<usize>;

    /// Remove expired records, returning how many were removed
    async fn purge_expired(&self) -> StoreResult<usize>;
}
