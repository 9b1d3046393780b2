//! Sharded Concurrent Store
//!
//! A thread-safe map from `u64` keys to [`Item`]s, split into a fixed number
//! of independently locked shards.
//!
//! ## Concurrency Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ShardedStore                            │
//! │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐           │
//! │  │ Shard 0 │ │ Shard 1 │ │ Shard 2 │ │ Shard N │           │
//! │  │ RwLock  │ │ RwLock  │ │ RwLock  │ │ RwLock  │           │
//! │  │ HashMap │ │ HashMap │ │ HashMap │ │ HashMap │           │
//! │  └─────────┘ └─────────┘ └─────────┘ └─────────┘           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A key always lands in the same shard (`hash(key) % N`), so two unrelated
//! keys only contend with probability ~1/N. No operation ever holds more than
//! one shard lock at a time.
//!
//! The store knows nothing about time: presence is the only criterion for
//! [`ShardedStore::load`]. Expiry is the sweeper's job.

use crate::storage::Item;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::ops::ControlFlow;

/// A single shard containing a portion of the items.
#[derive(Debug)]
struct Shard<V> {
    items: RwLock<HashMap<u64, Item<V>>>,
}

impl<V> Shard<V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }
}

/// Concurrent `u64 -> Item<V>` map with per-shard locking.
///
/// # Example
///
/// ```
/// use flashttl::storage::{Item, ShardedStore};
/// use std::time::Duration;
///
/// let store = ShardedStore::new(32);
/// store.store(7, Item::with_ttl("seven", Duration::from_secs(60)).unwrap());
///
/// assert_eq!(store.load(7), Some("seven"));
/// assert_eq!(store.count(), 1);
/// ```
#[derive(Debug)]
pub struct ShardedStore<V> {
    shards: Vec<Shard<V>>,
}

impl<V> ShardedStore<V> {
    /// Creates a store with `shards` shards.
    ///
    /// # Panics
    ///
    /// Panics if `shards` is zero. [`CacheConfig::validate`](crate::CacheConfig::validate)
    /// rejects that before the cache builds a store.
    pub fn new(shards: usize) -> Self {
        Self::with_capacity(shards, 0)
    }

    /// Creates a store pre-sized for roughly `capacity` items in total.
    pub fn with_capacity(shards: usize, capacity: usize) -> Self {
        assert!(shards > 0, "shard count must be greater than zero");

        let per_shard = capacity.div_ceil(shards);
        let shards = (0..shards).map(|_| Shard::with_capacity(per_shard)).collect();

        Self { shards }
    }

    /// Number of shards, fixed at construction.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Determines which shard a key belongs to.
    ///
    /// `DefaultHasher::new()` uses fixed keys, so the mapping never changes.
    #[inline]
    pub(crate) fn shard_index(&self, key: u64) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.shards.len()
    }

    #[inline]
    fn shard(&self, key: u64) -> &Shard<V> {
        &self.shards[self.shard_index(key)]
    }

    /// Inserts or overwrites the item for `key`.
    pub fn store(&self, key: u64, item: Item<V>) {
        self.shard(key).items.write().insert(key, item);
    }

    /// Removes `key` from its shard.
    ///
    /// Returns `true` if the key was present.
    pub fn delete(&self, key: u64) -> bool {
        self.shard(key).items.write().remove(&key).is_some()
    }

    /// Visits every item, one shard at a time.
    ///
    /// Each shard is read-locked only while it is being visited, so the walk
    /// is not a snapshot of the whole map. Returning `ControlFlow::Break`
    /// from `visit` stops the walk.
    ///
    /// `visit` must not call back into the store for a key in the shard being
    /// visited.
    pub fn range<F>(&self, mut visit: F)
    where
        F: FnMut(u64, &Item<V>) -> ControlFlow<()>,
    {
        for shard in &self.shards {
            let items = shard.items.read();
            for (key, item) in items.iter() {
                if visit(*key, item).is_break() {
                    return;
                }
            }
        }
    }

    /// Total number of items across all shards.
    ///
    /// Shards are counted one after another, so the result is approximate
    /// while other threads are writing.
    pub fn count(&self) -> usize {
        self.shards.iter().map(|shard| shard.items.read().len()).sum()
    }

    /// Returns true if no shard holds any item.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.items.read().is_empty())
    }

    /// Removes every item, shard by shard.
    pub fn clear(&self) {
        for shard in &self.shards {
            shard.items.write().clear();
        }
    }
}

impl<V: Clone> ShardedStore<V> {
    /// Returns a copy of the value stored for `key`.
    ///
    /// The deadline is not consulted.
    pub fn load(&self, key: u64) -> Option<V> {
        self.shard(key)
            .items
            .read()
            .get(&key)
            .map(|item| item.value.clone())
    }
}
