//! Background Tasks Module
//!
//! # Tasks
//! - TTL Cleanup: opt-in periodic purge of expired entries

mod cleanup;

pub use cleanup::spawn_cleanup_task;
