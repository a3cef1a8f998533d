//! Cache Statistics Module
//!
//! Tracks cache lookups and reclamation activity.

use std::fmt;

// == Cache Stats ==
/// Counters describing cache activity since construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups for an absent key
    pub misses: u64,
    /// Writes, including overwrites
    pub inserts: u64,
    /// Entries removed by reclamation sweeps
    pub reaped: u64,
    /// Completed reclamation sweeps
    pub sweeps: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    // == Record Sweep ==
    /// Counts one finished sweep and the entries it removed.
    pub fn record_sweep(&mut self, removed: usize) {
        self.sweeps += 1;
        self.reaped += removed as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "entries: {}", self.total_entries)?;
        writeln!(
            f,
            "hits: {} / misses: {} (hit rate {:.1}%)",
            self.hits,
            self.misses,
            self.hit_rate() * 100.0
        )?;
        writeln!(f, "inserts: {}", self.inserts)?;
        write!(f, "sweeps: {} / reaped: {}", self.sweeps, self.reaped)
    }
}
