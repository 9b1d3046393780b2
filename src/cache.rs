//! The public cache type.

use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::storage::{Item, ShardedStore, SweepStats, Sweeper};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{info, warn};

/// A concurrent key-value cache whose entries expire after a TTL.
///
/// Expired entries are removed by a background sweeper that runs every
/// `resolution`. Reads never check deadlines: an entry past its deadline stays
/// visible until the next sweep pass, so staleness is bounded by
/// `resolution` rather than being zero.
///
/// The sweeper is a Tokio task, so a cache must be built from inside a
/// runtime. All other operations are synchronous and may be called from any
/// thread.
///
/// # Example
///
/// ```
/// use flashttl::Cache;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> flashttl::Result<()> {
/// let cache = Cache::new(Duration::from_millis(100))?;
///
/// cache.set(1, "session-token", Duration::from_secs(60))?;
/// assert_eq!(cache.get(1), Some("session-token"));
///
/// cache.delete(1);
/// assert_eq!(cache.get(1), None);
///
/// cache.close()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<ShardedStore<V>>,
    sweeper: Sweeper,
    stats: Arc<SweepStats>,
    resolution: Duration,
    closed: AtomicBool,
}

/// Point-in-time cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries currently stored (approximate)
    pub entries: usize,
    /// Completed sweep passes
    pub sweeps: u64,
    /// Entries removed by sweep passes
    pub evicted: u64,
}

impl<V> Cache<V>
where
    V: Send + Sync + 'static,
{
    /// Creates a cache that sweeps every `resolution`, with default sizing.
    ///
    /// TTLs should be multiples of `resolution`; eviction can't be finer than
    /// it. Every pass scans the whole store, so very small resolutions cost
    /// CPU and lock traffic.
    pub fn new(resolution: Duration) -> Result<Self> {
        Self::with_config(CacheConfig::new(resolution))
    }

    /// Creates a cache from an explicit configuration.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(ShardedStore::with_capacity(config.shards, config.capacity));
        let stats = Arc::new(SweepStats::default());
        let sweeper = Sweeper::start(
            &runtime,
            Arc::clone(&store),
            config.resolution,
            Arc::clone(&stats),
        );

        Ok(Self {
            store,
            sweeper,
            stats,
            resolution: config.resolution,
            closed: AtomicBool::new(false),
        })
    }
}

impl<V> Cache<V> {
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Any previous value and deadline for `key` are replaced.
    pub fn set(&self, key: u64, value: V, ttl: Duration) -> Result<()> {
        let item = Item::with_ttl(value, ttl)?;
        self.store.store(key, item);
        Ok(())
    }

    /// Removes `key`. Does nothing if it isn't present.
    pub fn delete(&self, key: u64) {
        self.store.delete(key);
    }

    /// Removes every entry. The sweeper keeps running.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Stops the sweeper and removes every entry.
    ///
    /// Only the first call does anything; later calls return
    /// [`CacheError::AlreadyClosed`]. This does not wait for a sweep pass in
    /// progress; the sweeper finishes that pass and then exits.
    ///
    /// The cache stays usable after closing, but nothing is swept any more.
    pub fn close(&self) -> Result<()> {
        if self
            .closed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("close called on a cache that is already closed");
            return Err(CacheError::AlreadyClosed);
        }

        self.sweeper.stop();
        self.store.clear();

        info!("Cache closed");
        Ok(())
    }

    /// Returns true once [`Cache::close`] has succeeded.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// The interval between sweep passes.
    pub fn resolution(&self) -> Duration {
        self.resolution
    }

    /// Returns the approximate number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.store.count()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.store.count(),
            sweeps: self.stats.sweeps(),
            evicted: self.stats.evicted(),
        }
    }
}

impl<V: Clone> Cache<V> {
    /// Returns the value stored under `key`.
    ///
    /// The deadline is not checked: an expired entry is returned until a
    /// sweep pass removes it.
    pub fn get(&self, key: u64) -> Option<V> {
        self.store.load(key)
    }
}
