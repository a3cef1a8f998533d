//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheState;

/// Spawns a background task that sweeps the cache once every `ttl`.
///
/// The first sweep happens one full period after the call. Ticks follow a
/// fixed schedule: a sweep that overruns its period does not cause the
/// missed ticks to fire back-to-back, the next sweep waits for the next
/// period boundary instead.
///
/// The task only holds a weak reference to the cache state and exits on the
/// first tick after the cache has been dropped.
///
/// # Arguments
/// * `state` - Weak reference to the cache state
/// * `ttl` - Entry lifetime and sweep period
///
/// # Returns
/// A JoinHandle for the spawned task, which the owning cache aborts on drop.
pub fn spawn_reap_task(state: Weak<RwLock<CacheState>>, ttl: Duration) -> JoinHandle<()> {
    let start = Instant::now() + ttl;

    tokio::spawn(async move {
        debug!("Starting cache reaper with period of {:?}", ttl);

        let mut ticker = time::interval_at(start, ttl);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let Some(state) = state.upgrade() else {
                debug!("Cache dropped, stopping reaper");
                break;
            };

            let removed = {
                let mut guard = state.write().await;
                guard.reap(Instant::now(), ttl)
            };

            if removed > 0 {
                info!("Cache sweep: removed {} stale entries", removed);
            } else {
                debug!("Cache sweep: no stale entries found");
            }
        }
    })
}
