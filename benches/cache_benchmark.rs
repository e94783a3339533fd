use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use resilient_cache::{
    CacheConfig, HashMapStore, MokaStore, NoopSink, ResilientCache, ResilientCacheBuilder, Store,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

mod common;
use common::{BenchConfig, BenchUser, FakeDatabase, KeyGenerator};

fn setup(store: Arc<dyn Store>) -> ResilientCache {
    ResilientCacheBuilder::new(store)
        .config(CacheConfig {
            default_ttl: Duration::from_secs(600),
            ..CacheConfig::default()
        })
        .event_sink(Arc::new(NoopSink))
        .build()
}

fn stores() -> Vec<(&'static str, Arc<dyn Store>)> {
    let hashmap: Arc<dyn Store> = Arc::new(HashMapStore::default());
    let moka: Arc<dyn Store> = Arc::new(MokaStore::default());
    vec![("hashmap", hashmap), ("moka", moka)]
}

async fn lookup(cache: &ResilientCache, db: &FakeDatabase, key: &str) -> BenchUser {
    cache
        .get(key, || db.load(key), None)
        .await
        .unwrap_or_default()
}

/// Benchmark 1: Hot Cache (all hits, pure cache read performance)
fn bench_hot_cache(c: &mut Criterion, config: &BenchConfig) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("hot_cache");
    group.sample_size(config.sample_size);

    let db = FakeDatabase::new(1000, config.db_latency_ms);
    let keys = KeyGenerator::new(1000).sequential();

    for (name, store) in stores() {
        let cache = setup(store);

        // Pre-populate cache
        rt.block_on(async {
            for key in &keys {
                lookup(&cache, &db, key).await;
            }
        });

        group.bench_with_input(BenchmarkId::new("get", name), &keys, |b, keys| {
            b.to_async(&rt).iter(|| async {
                for key in keys {
                    black_box(lookup(&cache, &db, key).await);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark 2: Mixed Workload (80% hits, 20% misses)
fn bench_mixed_workload(c: &mut Criterion, config: &BenchConfig) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("mixed_workload");
    group.sample_size(config.sample_size.min(20));

    let db = FakeDatabase::new(500, config.db_latency_ms);
    let key_gen = KeyGenerator::new(500);

    for (name, store) in stores() {
        let cache = setup(store.clone());

        group.bench_function(BenchmarkId::new("get", name), |b| {
            b.to_async(&rt).iter(|| {
                let keys = key_gen.mixed(50, 0.8);
                let cache = &cache;
                let db = &db;
                let store = store.clone();
                async move {
                    for key in &keys {
                        black_box(lookup(cache, db, key).await);
                    }
                    // Evict cold keys so every iteration sees misses again.
                    for key in keys.iter().filter(|k| !is_hot(k)) {
                        store.remove(key).await.unwrap();
                    }
                }
            });
        });
    }

    group.finish();
}

fn is_hot(key: &str) -> bool {
    key.trim_start_matches("user:")
        .parse::<usize>()
        .map(|id| id < 100)
        .unwrap_or(false)
}

fn run_benchmarks(c: &mut Criterion) {
    let config = BenchConfig::new();

    eprintln!("\n=== Running Benchmarks ===\n");

    bench_hot_cache(c, &config);
    bench_mixed_workload(c, &config);
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
