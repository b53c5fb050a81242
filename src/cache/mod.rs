//! Cache Module
//!
//! Expiring in-memory memoization store for backend responses, with lazy
//! TTL expiration and an optional LRU capacity bound.

mod clock;
mod entry;
mod expiry;
mod key;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use expiry::ExpiryIndex;
pub use key::{CacheKey, KEY_SEPARATOR};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

use std::time::Duration;

// == Public Constants ==
/// Default TTL in milliseconds (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;

/// TTL used by `set` when the caller gives none
pub const DEFAULT_TTL: Duration = Duration::from_millis(DEFAULT_TTL_MS);

/// Maximum key length in bytes accepted over HTTP
pub const MAX_KEY_LENGTH: usize = 256;
