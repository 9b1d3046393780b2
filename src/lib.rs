//! # FlashTTL - A Sharded In-Memory TTL Cache
//!
//! FlashTTL is a concurrent, in-memory key-value cache where every entry has
//! an absolute deadline. Expired entries are reclaimed in bulk by a periodic
//! background sweep instead of on every access.
//!
//! ## Features
//!
//! - **Sharded Storage**: 32 independently locked shards by default
//! - **Background Expiry**: A Tokio task sweeps stale entries every `resolution`
//! - **Typed Values**: One value type per cache, no boxing
//! - **Explicit Lifecycle**: `close` stops the sweeper exactly once
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                               Cache<V>                                  │
//! │                                                                         │
//! │   get / set / delete / clear / close                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────┐                       │
//! │  │              ShardedStore<V>                 │                       │
//! │  │  ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐ │                       │
//! │  │  │Shard 0 │ │Shard 1 │ │Shard 2 │ │...N    │ │                       │
//! │  │  │RwLock  │ │RwLock  │ │RwLock  │ │shards  │ │                       │
//! │  │  └────────┘ └────────┘ └────────┘ └────────┘ │                       │
//! │  └──────────────────────────────────────────────┘                       │
//! │                         ▲                                               │
//! │                         │                                               │
//! │  ┌──────────────────────┴──────────────────────┐                        │
//! │  │                  Sweeper                    │                        │
//! │  │          (Background Tokio Task)            │                        │
//! │  └─────────────────────────────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use flashttl::Cache;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> flashttl::Result<()> {
//!     // Sweep every 100ms
//!     let cache = Cache::new(Duration::from_millis(100))?;
//!
//!     cache.set(42, String::from("answer"), Duration::from_secs(1))?;
//!     assert_eq!(cache.get(42), Some(String::from("answer")));
//!
//!     cache.close()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Design Highlights
//!
//! ### Lazy Expiry Only
//!
//! `get` never looks at deadlines. An entry stays readable after its deadline
//! until the next sweep pass removes it, so the staleness window is at most
//! `resolution`. Choose TTLs as multiples of the resolution.
//!
//! ### Two-Phase Sweeps
//!
//! A sweep pass first scans every shard (one read lock at a time) for keys
//! whose deadline is before the pass start, then deletes them one by one.
//! An entry refreshed with `set` between those two phases is still deleted.
//!
//! ### Closing
//!
//! `close` signals the sweeper and clears the store without waiting for the
//! sweeper task. A second `close` returns [`CacheError::AlreadyClosed`].

pub mod cache;
pub mod config;
pub mod error;
pub mod storage;

// Re-export commonly used types for convenience
pub use cache::{Cache, CacheStats};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use storage::{Item, ShardedStore};

/// Version of FlashTTL
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
