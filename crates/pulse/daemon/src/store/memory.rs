//! In-memory TTL store implementation

use super::traits::MetricStore;
use crate::error::StoreResult;
use async_trait::async_trait;
use pulse_types::MetricRecord;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct Entry {
    record: MetricRecord,
    expires_at: Instant,
}

/// In-memory metric store with per-record expiry.
///
/// The default backend. A record becomes unobservable once its TTL
/// elapses; the periodic sweeper reclaims the memory.
pub struct InMemoryStore {
    entries: RwLock<HashMap<i64, Entry>>,
    ttl: Duration,
}

impl InMemoryStore {
    /// Create a store whose records live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }
}

#[async_trait]
impl MetricStore for InMemoryStore {
    async fn put(&self, record: MetricRecord) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(
            record.timestamp,
            Entry {
                record,
                expires_at: Instant::now() + self.ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, timestamp: i64) -> StoreResult<Option<MetricRecord>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&timestamp)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.record.clone()))
    }

    async fn len(&self) -> StoreResult<usize> {
        Ok(self.entries.read().await.len())
    }

    async fn purge_expired(&self) -> StoreResult<usize> {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        Ok(before - entries.len())
    }
}
