//! Cache Module
//!
//! Provides a generic in-memory cache with per-entry TTL and lazy expiration.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, MockClock, SystemClock};
pub use entry::{CacheEntry, MAX_TTL};
pub use stats::CacheStats;
pub use store::TtlCache;

use std::time::Duration;

// == Public Constants ==
/// TTL used when a cache is built with `Default`
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
