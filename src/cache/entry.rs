//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A raw response body and the instant it was written.
///
/// Entries are immutable; an overwrite replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry was written
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Stale ==
    /// Checks whether the entry is strictly older than `ttl` at `now`.
    ///
    /// An entry exactly `ttl` old is still fresh; reclamation only removes
    /// entries created before the cutoff `now - ttl`.
    pub fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}
