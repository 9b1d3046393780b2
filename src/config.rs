//! Cache configuration.

use crate::error::{CacheError, Result};
use std::time::Duration;

/// Default number of shards in the store.
pub const DEFAULT_SHARDS: usize = 32;

/// Default number of entries the store is pre-sized for.
/// Avoids reallocation for small caches.
pub const DEFAULT_CAPACITY: usize = 64;

/// Default interval between sweep passes.
pub const DEFAULT_RESOLUTION: Duration = Duration::from_millis(100);

/// Configuration for a [`Cache`](crate::Cache).
///
/// # Example
///
/// ```
/// use flashttl::CacheConfig;
/// use std::time::Duration;
///
/// let config = CacheConfig::default()
///     .with_resolution(Duration::from_secs(1))
///     .with_shards(64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Interval between sweep passes (default: 100ms).
    ///
    /// Eviction granularity equals the resolution, so TTLs should be
    /// multiples of it. Every pass scans the whole store.
    pub resolution: Duration,

    /// Number of independently locked shards (default: 32)
    pub shards: usize,

    /// Initial capacity spread across all shards (default: 64)
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            shards: DEFAULT_SHARDS,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration with the given resolution and default sizing.
    pub fn new(resolution: Duration) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Sets the interval between sweep passes.
    pub fn with_resolution(mut self, resolution: Duration) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the number of shards.
    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = shards;
        self
    }

    /// Sets the initial capacity hint.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks that the configuration can build a working cache.
    pub fn validate(&self) -> Result<()> {
        if self.resolution.is_zero() {
            return Err(CacheError::invalid("resolution must be greater than zero"));
        }
        if self.shards == 0 {
            return Err(CacheError::invalid("shard count must be greater than zero"));
        }
        Ok(())
    }
}
