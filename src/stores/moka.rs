use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};

use crate::entry::EntryOptions;
use crate::error::CacheError;
use crate::store::Store;

/// Configuration for MokaStore.
#[derive(Debug, Clone)]
pub struct MokaStoreConfig {
    /// Maximum number of entries the cache can hold.
    pub max_capacity: u64,
}

impl Default for MokaStoreConfig {
    fn default() -> Self {
        MokaStoreConfig {
            max_capacity: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
struct MokaEntry {
    value: String,
    options: EntryOptions,
}

/// Per-entry expiry derived from the `EntryOptions` given at write time.
struct EntryExpiry;

impl Expiry<String, MokaEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &MokaEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.options.initial_lifetime())
    }

    fn expire_after_read(
        &self,
        _key: &String,
        entry: &MokaEntry,
        read_at: Instant,
        duration_until_expiry: Option<Duration>,
        last_modified_at: Instant,
    ) -> Option<Duration> {
        if entry.options.sliding.is_none() {
            return duration_until_expiry;
        }
        let since_write = read_at.saturating_duration_since(last_modified_at);
        Some(entry.options.lifetime_after(since_write))
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &MokaEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.options.initial_lifetime())
    }
}

/// High-performance concurrent store using Moka.
///
/// MokaStore provides:
/// - Lock-free concurrent access for reads and writes
/// - Per-entry absolute and sliding expiry enforced by Moka itself
/// - Size-bounded eviction
pub struct MokaStore {
    cache: Cache<String, MokaEntry>,
}

impl MokaStore {
    /// Create a new MokaStore with the given configuration.
    ///
    /// # Example
    /// ```ignore
    /// let store = MokaStore::new(MokaStoreConfig { max_capacity: 10_000 });
    /// ```
    pub fn new(config: MokaStoreConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(EntryExpiry)
            .build();

        MokaStore { cache }
    }

    /// Approximate number of live entries (for monitoring/debugging).
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

impl Default for MokaStore {
    fn default() -> Self {
        Self::new(MokaStoreConfig::default())
    }
}

#[async_trait]
impl Store for MokaStore {
    fn name(&self) -> &'static str {
        "moka"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: String, options: EntryOptions) -> Result<(), CacheError> {
        self.cache
            .insert(key.to_string(), MokaEntry { value, options })
            .await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.cache.invalidate(key).await;
        Ok(())
    }
}
