//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Removes stale cache entries once per TTL period

mod reaper;

pub use reaper::spawn_reap_task;
