//! TTL Cleanup Task
//!
//! Background task that periodically purges expired cache entries. The cache
//! never schedules this on its own; the service spawns it only when a cleanup
//! interval is configured.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, TtlCache};

/// Spawns a background task that calls [`TtlCache::cleanup`] every `interval`.
///
/// The task runs until aborted through the returned handle. It holds the
/// write lock only for the duration of each sweep.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(TtlCache::<String>::default()));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<T, C>(
    cache: Arc<RwLock<TtlCache<T, C>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
