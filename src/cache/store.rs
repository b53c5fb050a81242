//! Cache Store Module
//!
//! Main cache engine: a HashMap of entries with lazy TTL expiration, an
//! expiry index for purges and an optional LRU capacity bound.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, ExpiryIndex, LruTracker, SystemClock};
use crate::config::Config;

// == Cache Store ==
/// Expiring key-value store.
///
/// Every operation is total: a missing, cleared or expired key reads as
/// `None`. Expired entries stay resident until the next read of that key,
/// a purge, or a capacity check needs the room.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Access order, consulted only when a capacity bound is set
    lru: LruTracker,
    /// Deadlines for purging
    expiry: ExpiryIndex,
    stats: CacheStats,
    /// `None` means unbounded
    max_entries: Option<usize>,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an unbounded store on the system clock.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            expiry: ExpiryIndex::new(),
            stats: CacheStats::new(),
            max_entries: None,
            default_ttl,
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates a store from the `default_ttl_ms` and `max_entries` settings.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_ttl()).with_max_entries(config.max_entries)
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Bounds the number of stored entries. `0` leaves the store unbounded.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = (max_entries > 0).then_some(max_entries);
        self
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Set ==
    /// Stores `value` under `key` until `now + ttl`, using the default TTL
    /// when `ttl` is `None`.
    ///
    /// Any prior entry for the key is replaced wholesale, value and expiry.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        let now = self.clock.now_ms();

        if let Some(old) = self.entries.remove(&key) {
            self.expiry.remove(old.expires_at, &key);
        } else {
            self.make_room(now);
        }

        let entry = CacheEntry::new(value, now, ttl.unwrap_or(self.default_ttl));
        self.expiry.insert(entry.expires_at, &key);
        self.lru.touch(&key);
        self.entries.insert(key, entry);

        self.stats.set_total_entries(self.entries.len());
    }

    // == Remove ==
    /// Removes a single key, returning its value if it was still live.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();
        let entry = self.take_entry(key)?;
        self.stats.set_total_entries(self.entries.len());

        if entry.is_expired_at(now) {
            self.stats.record_expirations(1);
            None
        } else {
            Some(entry.value)
        }
    }

    // == Clear ==
    /// Removes every entry regardless of remaining TTL.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.expiry.clear();
        self.stats.set_total_entries(0);
    }

    // == Time To Live ==
    /// Time left for a live entry. Does not evict.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| Duration::from_millis(entry.ttl_remaining_ms(now)))
    }

    // == Purge Expired ==
    /// Removes every expired entry. Returns how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        self.purge_expired_at(now)
    }

    fn purge_expired_at(&mut self, now: u64) -> usize {
        let expired = self.expiry.drain_expired(now);
        for key in &expired {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired.len());
        self.stats.set_total_entries(self.entries.len());
        expired.len()
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Number of stored entries, counting expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry is physically stored for `key`, expired or not.
    pub fn is_resident(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn take_entry(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);
        self.expiry.remove(entry.expires_at, key);
        Some(entry)
    }

    /// Makes space for one new key when a capacity bound is set. Expired
    /// entries go first; the least recently used live entry goes after.
    fn make_room(&mut self, now: u64) {
        let Some(max_entries) = self.max_entries else {
            return;
        };

        if self.entries.len() >= max_entries {
            self.purge_expired_at(now);
        }

        while self.entries.len() >= max_entries {
            let Some(oldest) = self.lru.pop_oldest() else {
                break;
            };
            if let Some(entry) = self.entries.remove(&oldest) {
                self.expiry.remove(entry.expires_at, &oldest);
                self.stats.record_eviction();
                debug!(key = %oldest, "evicted least recently used entry");
            }
        }
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Returns the value for `key` if present and unexpired.
    ///
    /// An expired entry is removed before `None` is returned.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.take_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        let value = self.entries.get(key).map(|entry| entry.value.clone());
        self.lru.touch(key);
        self.stats.record_hit();
        value
    }

    // == Memoize ==
    /// Returns the cached value, or computes it with `f`, stores it and
    /// returns it.
    pub fn get_or_insert_with<F>(&mut self, key: &str, ttl: Option<Duration>, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }

        let value = f();
        self.set(key, value.clone(), ttl);
        value
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with) for a fallible
    /// producer. An error is returned as is and nothing is cached.
    pub fn try_get_or_insert_with<E, F>(
        &mut self,
        key: &str,
        ttl: Option<Duration>,
        f: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let value = f()?;
        self.set(key, value.clone(), ttl);
        Ok(value)
    }
}
