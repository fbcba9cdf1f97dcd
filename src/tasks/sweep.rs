//! Cache Sweep Task
//!
//! Optional background task that periodically removes expired cache entries.
//! Off by default: the proxy's read path treats expired entries as misses
//! and otherwise leaves them in place, so without this task the cache grows
//! with the number of distinct inputs ever served.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::ServiceProxy;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep acquires the write lock on the proxy to
/// remove expired entries.
///
/// # Arguments
/// * `proxy` - Shared reference to the proxy whose cache gets swept
/// * `sweep_interval_secs` - Interval in seconds between sweeps; must be
///   nonzero (callers skip spawning when sweeping is disabled)
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task(
    proxy: Arc<RwLock<ServiceProxy>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and sweep expired entries
            let removed = {
                let mut proxy_guard = proxy.write().await;
                proxy_guard.sweep_expired()
            };

            // Log sweep statistics
            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
