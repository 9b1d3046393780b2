//! Throughput Benchmark for FlashTTL
//!
//! This benchmark measures the performance of the cache and its sweeper
//! under various workloads.

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use flashttl::storage::{sweep_expired, Item, ShardedStore};
use flashttl::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

const TTL: Duration = Duration::from_secs(3600);

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

fn cache(rt: &Runtime) -> Cache<Bytes> {
    let _guard = rt.enter();
    Cache::new(Duration::from_secs(1)).unwrap()
}

/// Benchmark SET operations
fn bench_set(c: &mut Criterion) {
    let rt = runtime();
    let cache = cache(&rt);

    let mut group = c.benchmark_group("set");
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_small", |b| {
        let mut i = 0u64;
        let value = Bytes::from("small_value");
        b.iter(|| {
            cache.set(i, value.clone(), TTL).unwrap();
            i += 1;
        });
    });

    group.bench_function("set_overwrite", |b| {
        let mut i = 0u64;
        let value = Bytes::from("x".repeat(1024)); // 1KB value
        b.iter(|| {
            cache.set(i % 1_000, value.clone(), TTL).unwrap();
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark GET operations
fn bench_get(c: &mut Criterion) {
    let rt = runtime();
    let cache = cache(&rt);

    // Pre-populate with data
    for i in 0..100_000u64 {
        cache.set(i, Bytes::from(format!("value:{}", i)), TTL).unwrap();
    }

    let mut group = c.benchmark_group("get");
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_existing", |b| {
        let mut i = 0u64;
        b.iter(|| {
            black_box(cache.get(i % 100_000));
            i += 1;
        });
    });

    group.bench_function("get_missing", |b| {
        let mut i = 100_000u64;
        b.iter(|| {
            black_box(cache.get(i));
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark mixed workload (80% reads, 20% writes)
fn bench_mixed(c: &mut Criterion) {
    let rt = runtime();
    let cache = cache(&rt);

    // Pre-populate
    for i in 0..10_000u64 {
        cache.set(i, Bytes::from("value"), TTL).unwrap();
    }

    let mut group = c.benchmark_group("mixed");
    group.throughput(Throughput::Elements(1));

    group.bench_function("80_read_20_write", |b| {
        let mut i = 0u64;
        let value = Bytes::from("value");
        b.iter(|| {
            if i % 5 == 0 {
                // 20% writes
                cache.set(10_000 + i, value.clone(), TTL).unwrap();
            } else {
                // 80% reads
                black_box(cache.get(i % 10_000));
            }
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark concurrent access
fn bench_concurrent(c: &mut Criterion) {
    use std::thread;

    let rt = runtime();

    let mut group = c.benchmark_group("concurrent");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("4_threads_mixed", |b| {
        b.iter(|| {
            let cache = Arc::new(cache(&rt));
            let handles: Vec<_> = (0..4u64)
                .map(|t| {
                    let cache = Arc::clone(&cache);
                    thread::spawn(move || {
                        let value = Bytes::from("value");
                        for i in 0..10_000u64 {
                            let key = t * 10_000 + i;
                            cache.set(key, value.clone(), TTL).unwrap();
                            cache.get(key);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(cache.len());
        });
    });

    group.finish();
}

/// Benchmark a full sweep pass
fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.throughput(Throughput::Elements(100_000));

    group.bench_function("sweep_none_expired", |b| {
        let store = ShardedStore::new(32);
        let deadline = Instant::now() + TTL;
        for i in 0..100_000u64 {
            store.store(i, Item::new(i, deadline));
        }
        b.iter(|| black_box(sweep_expired(&store)));
    });

    group.bench_function("sweep_half_expired", |b| {
        b.iter_batched(
            || {
                let store = ShardedStore::new(32);
                let now = Instant::now();
                for i in 0..100_000u64 {
                    let deadline = if i % 2 == 0 { now - Duration::from_millis(1) } else { now + TTL };
                    store.store(i, Item::new(i, deadline));
                }
                store
            },
            |store| black_box(sweep_expired(&store)),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_set,
    bench_get,
    bench_mixed,
    bench_concurrent,
    bench_sweep,
);

criterion_main!(benches);
