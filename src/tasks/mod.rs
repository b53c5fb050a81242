//! Background Tasks Module
//!
//! # Tasks
//! - TTL Purge: drops expired entries at a configured interval (opt-in)

mod cleanup;

pub use cleanup::spawn_cleanup_task;
