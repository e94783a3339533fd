//! Runs the two lookups the values endpoints make:
//!
//! - `get1`: `get("key", "obj1")` on an empty cache computes and stores `obj1`.
//! - `get2`: `set("key", "test")` then `get("key", "obj2")` returns `test`.
//!
//! Set `REDIS_URL` to run against Redis instead of the in-memory store.

use resilient_cache::{
    CacheConfig, CacheError, HashMapStore, RedisStore, RedisStoreConfig, ResilientCache,
    ResilientCacheBuilder, Store,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn get1(cache: &ResilientCache) -> Result<Vec<String>, CacheError> {
    let result = cache
        .get_string("key", || async { Ok("obj1".to_string()) }, None)
        .await?;
    Ok(vec![result])
}

async fn get2(cache: &ResilientCache) -> Result<Vec<String>, CacheError> {
    cache.set_string("key", "test", None).await?;
    let result = cache
        .get_string("key", || async { Ok("obj2".to_string()) }, None)
        .await?;
    Ok(vec![result])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resilient_cache=debug,values=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: Arc<dyn Store> = match std::env::var("REDIS_URL") {
        Ok(url) => Arc::new(
            RedisStore::new(RedisStoreConfig {
                url,
                key_prefix: Some("values-demo".to_string()),
            })
            .await?,
        ),
        Err(_) => Arc::new(HashMapStore::default()),
    };
    info!(store = store.name(), "starting values demo");

    let cache = ResilientCacheBuilder::new(store)
        .config(CacheConfig::from_env())
        .build();

    info!(response = ?get1(&cache).await?, "GET /api/values/get1");
    info!(response = ?get2(&cache).await?, "GET /api/values/get2");

    Ok(())
}
