//! TTL Purge Task
//!
//! Optional background task that drops expired entries nobody has read.
//! Without it, expired entries stay resident until their key is read.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a task that calls [`CacheStore::purge_expired`] every `interval`.
///
/// The returned handle is aborted on shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(CacheStore::<Value>::new(DEFAULT_TTL)));
/// let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(30));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(cache: Arc<RwLock<CacheStore<V>>>, interval: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "starting TTL purge task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            if removed > 0 {
                info!("TTL purge: removed {} expired entries", removed);
            } else {
                debug!("TTL purge: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{ManualClock, DEFAULT_TTL};

    fn shared_store(clock: &ManualClock) -> Arc<RwLock<CacheStore<String>>> {
        let store = CacheStore::new(DEFAULT_TTL).with_clock(Arc::new(clock.clone()));
        Arc::new(RwLock::new(store))
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let clock = ManualClock::new(0);
        let cache = shared_store(&clock);

        cache
            .write()
            .await
            .set("expire_soon", "value".to_string(), Some(Duration::from_secs(1)));
        clock.advance(Duration::from_secs(2));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;

        {
            let cache_guard = cache.read().await;
            assert!(!cache_guard.is_resident("expire_soon"));
            assert_eq!(cache_guard.stats().expirations, 1);
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let clock = ManualClock::new(0);
        let cache = shared_store(&clock);

        cache
            .write()
            .await
            .set("long_lived", "value".to_string(), Some(Duration::from_secs(3_600)));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(
            cache.write().await.get("long_lived"),
            Some("value".to_string())
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let clock = ManualClock::new(0);
        let handle = spawn_cleanup_task(shared_store(&clock), Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
