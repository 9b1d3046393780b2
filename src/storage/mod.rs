//! Storage Module
//!
//! This module provides the storage layer for FlashTTL: the item model, a
//! thread-safe sharded store, and the background sweeper that evicts stale
//! items.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ShardedStore                            │
//! │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐           │
//! │  │ Shard 0 │ │ Shard 1 │ │ Shard 2 │ │...32    │           │
//! │  │ RwLock  │ │ RwLock  │ │ RwLock  │ │ shards  │           │
//! │  └─────────┘ └─────────┘ └─────────┘ └─────────┘           │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                            │
//!              ┌─────────────┴─────────────┐
//!              │         Sweeper           │
//!              │  (Background Tokio Task)  │
//!              └───────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use flashttl::storage::{sweep_expired, Item, ShardedStore};
//! use std::time::{Duration, Instant};
//!
//! let store = ShardedStore::new(32);
//! store.store(1, Item::new("stale", Instant::now() - Duration::from_millis(1)));
//! store.store(2, Item::with_ttl("fresh", Duration::from_secs(60)).unwrap());
//!
//! // Reads don't look at deadlines
//! assert_eq!(store.load(1), Some("stale"));
//!
//! // A sweep pass does
//! assert_eq!(sweep_expired(&store), 1);
//! assert_eq!(store.load(1), None);
//! assert_eq!(store.load(2), Some("fresh"));
//! ```

pub mod item;
pub mod store;
pub mod sweeper;

// Re-export commonly used types
pub use item::Item;
pub use store::ShardedStore;
pub use sweeper::{sweep_expired, SweepStats, Sweeper};
