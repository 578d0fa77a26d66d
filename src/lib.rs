//! TTL Cache - a generic in-memory cache with per-entry expiration
//!
//! Entries expire lazily: a read never returns an expired value and removes
//! it on the spot, while `cleanup` purges expired entries in bulk. The crate
//! also ships a small axum service hosting one cache over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{Clock, MockClock, SystemClock, TtlCache};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
