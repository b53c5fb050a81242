//! CMS Cache - expiring memoization cache for headless CMS backend responses
//!
//! Values live until their TTL elapses and are evicted lazily on the next
//! read. The store is usable directly as a library or through a small HTTP
//! service.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{AppState, SharedCache};
pub use cache::{CacheKey, CacheStore};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
