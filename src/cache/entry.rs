//! Cache Entry Module
//!
//! A stored value together with its absolute expiration time.

use std::time::Duration;

// == Cache Entry ==
/// A single cached payload. Timestamps are Unix milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored payload, opaque to the cache
    pub value: V,
    /// When the entry was written
    pub created_at: u64,
    /// First instant at which the entry is no longer visible
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry written at `now_ms` that lives for `ttl`.
    pub fn new(value: V, now_ms: u64, ttl: Duration) -> Self {
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// An entry is visible only while `now_ms < expires_at`, so it is
    /// already expired at the exact boundary.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Milliseconds left before expiry, `0` once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}
