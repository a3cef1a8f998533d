//! Cache Store Module
//!
//! Response cache keyed by request URL, with a fixed TTL enforced by a
//! background reaper.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reap_task;

// == Cache State ==
/// Entries and counters guarded by the cache lock.
#[derive(Debug, Default)]
pub struct CacheState {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

impl CacheState {
    /// Removes every entry strictly older than `ttl` at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(now, ttl));
        let removed = before - self.entries.len();

        self.stats.record_sweep(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Snapshot of the counters with the current entry count.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}

// == Expiring Cache ==
/// Byte-payload cache with a fixed time-to-live.
///
/// Reads do not filter by freshness: a stale entry stays visible until the
/// next sweep removes it. Sweeps run every `ttl`, so an entry can outlive its
/// TTL by up to one more period (at most `2 * ttl` in total).
///
/// All reads, writes and sweeps go through one lock. The reaper task is
/// aborted when the cache is dropped.
#[derive(Debug)]
pub struct ExpiringCache {
    state: Arc<RwLock<CacheState>>,
    ttl: Duration,
    reaper: JoinHandle<()>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper with period `ttl`.
    ///
    /// Must be called from within a tokio runtime. A zero `ttl` is rejected.
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(PokedexError::InvalidConfig("cache ttl must be non-zero"));
        }

        let state = Arc::new(RwLock::new(CacheState::default()));
        let reaper = spawn_reap_task(Arc::downgrade(&state), ttl);

        Ok(Self { state, ttl, reaper })
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, restarting its clock.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        let mut state = self.state.write().await;
        debug!(key = %key, bytes = value.len(), "cache add");

        state.entries.insert(key, CacheEntry::new(value));
        state.stats.record_insert();
        let len = state.entries.len();
        state.stats.set_total_entries(len);
    }

    // == Get ==
    /// Returns the stored payload for `key`, stale or not.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        // Write lock: lookups update the hit/miss counters
        let mut state = self.state.write().await;
        match state.entries.get(key).map(|entry| entry.value.clone()) {
            Some(value) => {
                state.stats.record_hit();
                debug!(key, "cache hit");
                Some(value)
            }
            None => {
                state.stats.record_miss();
                debug!(key, "cache miss");
                None
            }
        }
    }

    // == Reap ==
    /// Runs one sweep immediately, outside the reaper's schedule.
    ///
    /// Returns the number of entries removed.
    pub async fn reap(&self) -> usize {
        let mut state = self.state.write().await;
        state.reap(Instant::now(), self.ttl)
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.state.read().await.stats()
    }

    /// Returns the current number of entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    /// The configured TTL, which is also the sweep period.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Drop for ExpiringCache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
