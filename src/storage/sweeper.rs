//! Background Expiry Sweeper
//!
//! This module implements the background task that evicts stale items.
//! Reads never look at deadlines, so this task is the only thing that
//! removes expired items from the store.
//!
//! ## Design
//!
//! The sweeper runs as a Tokio task and:
//! 1. Waits for the next tick of a fixed `resolution` interval
//! 2. Scans the whole store, collecting keys whose deadline has passed
//! 3. Deletes the collected keys one by one
//! 4. Logs how many keys were evicted
//!
//! Scanning and deleting are two separate phases so that no shard lock is
//! held while deleting. An item refreshed between the two phases is still
//! deleted; expiry is only ever bounded by `resolution`, never exact.

use crate::storage::ShardedStore;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{interval_at, MissedTickBehavior};
use tracing::{debug, info, trace};

/// Counters shared between the sweeper task and the cache.
#[derive(Debug, Default)]
pub struct SweepStats {
    /// Completed sweep passes
    sweeps: AtomicU64,
    /// Items removed by sweep passes
    evicted: AtomicU64,
}

impl SweepStats {
    pub fn sweeps(&self) -> u64 {
        self.sweeps.load(Ordering::Relaxed)
    }

    pub fn evicted(&self) -> u64 {
        self.evicted.load(Ordering::Relaxed)
    }

    fn record(&self, evicted: usize) {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
        self.evicted.fetch_add(evicted as u64, Ordering::Relaxed);
    }
}

/// Performs one sweep pass over `store`.
///
/// `now` is captured once, before the scan. Returns the number of items
/// actually removed.
pub fn sweep_expired<V>(store: &ShardedStore<V>) -> usize {
    let now = Instant::now();

    let mut expired = Vec::with_capacity(store.count());
    store.range(|key, item| {
        if item.is_expired_at(now) {
            expired.push(key);
        }
        ControlFlow::Continue(())
    });

    expired.into_iter().filter(|&key| store.delete(key)).count()
}

/// A handle to the running expiry sweeper.
///
/// When this handle is dropped, the sweeper task will be stopped.
#[derive(Debug)]
pub struct Sweeper {
    /// Sender to signal shutdown
    shutdown_tx: watch::Sender<bool>,
}

impl Sweeper {
    /// Starts the sweeper on `runtime`.
    ///
    /// The first pass runs one `resolution` after this call.
    pub fn start<V>(
        runtime: &Handle,
        store: Arc<ShardedStore<V>>,
        resolution: Duration,
        stats: Arc<SweepStats>,
    ) -> Self
    where
        V: Send + Sync + 'static,
    {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        info!(
            resolution_ms = resolution.as_millis() as u64,
            shards = store.shard_count(),
            "Background expiry sweeper started"
        );

        runtime.spawn(sweeper_loop(store, resolution, stats, shutdown_rx));

        Self { shutdown_tx }
    }

    /// Signals the sweeper to stop.
    ///
    /// Returns immediately. A pass already in progress runs to completion
    /// and the task exits at its next wake-up.
    pub fn stop(&self) {
        if !self.shutdown_tx.send_replace(true) {
            debug!("Background expiry sweeper signalled to stop");
        }
    }

    /// Returns true once [`Sweeper::stop`] has been called.
    pub fn is_stopped(&self) -> bool {
        *self.shutdown_tx.borrow()
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The main sweeper loop.
async fn sweeper_loop<V>(
    store: Arc<ShardedStore<V>>,
    resolution: Duration,
    stats: Arc<SweepStats>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut ticker = interval_at(tokio::time::Instant::now() + resolution, resolution);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        // Wait for the next tick or shutdown signal
        tokio::select! {
            biased;
            result = shutdown_rx.changed() => {
                if result.is_err() || *shutdown_rx.borrow() {
                    debug!("Expiry sweeper received shutdown signal");
                    return;
                }
            }
            _ = ticker.tick() => {
                // A stop that raced with this tick wins
                if *shutdown_rx.borrow() {
                    debug!("Expiry sweeper received shutdown signal");
                    return;
                }

                let evicted = sweep_expired(&store);
                stats.record(evicted);

                if evicted > 0 {
                    debug!(
                        evicted = evicted,
                        remaining = store.count(),
                        "Expired keys cleaned up"
                    );
                } else {
                    trace!("Sweep pass found no expired keys");
                }
            }
        }
    }
}
