//! Cache Module
//!
//! Provides an in-memory response cache with fixed TTL and periodic reclamation.

mod entry;
mod stats;
mod store;


pub(crate) use entry::CacheEntry;
pub use stats::CacheStats;
pub(crate) use store::CacheState;
pub use store::ExpiringCache;
