//! Configuration Module
//!
//! Loads server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_MS;

/// Server configuration parameters.
///
/// Every value has a default; unparseable variables fall back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// TTL in milliseconds for entries set without one
    pub default_ttl_ms: u64,
    /// Maximum number of entries, 0 = unbounded
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background purge interval in milliseconds, 0 = lazy expiration only
    pub cleanup_interval_ms: u64,
}

impl Config {
    /// Creates a Config from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `MAX_ENTRIES` - Capacity bound, 0 for none (default: 0)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL_MS` - Purge interval, 0 to disable (default: 0)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl_ms: env_or("DEFAULT_TTL_MS", defaults.default_ttl_ms),
            max_entries: env_or("MAX_ENTRIES", defaults.max_entries),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval_ms: env_or("CLEANUP_INTERVAL_MS", defaults.cleanup_interval_ms),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }

    /// Purge interval, or `None` when the background purge is disabled.
    pub fn cleanup_interval(&self) -> Option<Duration> {
        (self.cleanup_interval_ms > 0).then(|| Duration::from_millis(self.cleanup_interval_ms))
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
            max_entries: 0,
            server_port: 3000,
            cleanup_interval_ms: 0,
        }
    }
}
