use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::entry::{Deadline, EntryOptions};
use crate::error::CacheError;
use crate::store::Store;

/// Configuration for HashMapStore.
#[derive(Debug, Clone, Default)]
pub struct HashMapStoreConfig {
    /// Upper bound on the number of entries.
    ///
    /// When a `set` pushes the map over this bound, expired entries are dropped
    /// first, then the entries closest to expiry. `None` disables the bound.
    pub max_entries: Option<usize>,
}

/// Internal stored entry with expiration time.
#[derive(Debug, Clone)]
struct StoredEntry {
    value: String,
    deadline: Deadline,
}

/// Thread-safe in-memory store using HashMap with RwLock.
///
/// Expired entries are removed lazily, when they are read or when the
/// capacity bound is enforced. Reads take the write lock because they may
/// slide an entry's expiry forward.
///
/// Suitable for tests, single-process services and small caches. For high
/// concurrency consider `MokaStore` instead.
pub struct HashMapStore {
    state: RwLock<HashMap<String, StoredEntry>>,
    max_entries: Option<usize>,
}

impl HashMapStore {
    /// Create a new HashMapStore with the given configuration.
    pub fn new(config: HashMapStoreConfig) -> Self {
        HashMapStore {
            state: RwLock::new(HashMap::new()),
            max_entries: config.max_entries,
        }
    }

    /// Number of entries currently held, including expired ones not yet purged.
    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }

    /// Drop every expired entry.
    pub async fn purge_expired(&self) -> usize {
        let mut state = self.state.write().await;
        let before = state.len();
        let now = Instant::now();
        state.retain(|_, v| !v.deadline.is_expired(now));
        before - state.len()
    }

    fn enforce_capacity(state: &mut HashMap<String, StoredEntry>, max_entries: usize) {
        if state.len() <= max_entries {
            return;
        }

        let now = Instant::now();
        state.retain(|_, v| !v.deadline.is_expired(now));

        if state.len() > max_entries {
            let mut entries: Vec<_> = state
                .iter()
                .map(|(k, v)| (k.clone(), v.deadline.expires_at()))
                .collect();
            entries.sort_by_key(|(_, expires)| *expires);

            let to_remove = state.len() - max_entries;
            for (key, _) in entries.into_iter().take(to_remove) {
                state.remove(&key);
            }
        }
    }
}

impl Default for HashMapStore {
    fn default() -> Self {
        Self::new(HashMapStoreConfig::default())
    }
}

#[async_trait]
impl Store for HashMapStore {
    fn name(&self) -> &'static str {
        "hashmap"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut state = self.state.write().await;
        let now = Instant::now();

        let Some(stored) = state.get_mut(key) else {
            return Ok(None);
        };

        if stored.deadline.is_expired(now) {
            state.remove(key);
            return Ok(None);
        }

        stored.deadline.touch(now);
        Ok(Some(stored.value.clone()))
    }

    async fn set(&self, key: &str, value: String, options: EntryOptions) -> Result<(), CacheError> {
        let mut state = self.state.write().await;
        state.insert(
            key.to_string(),
            StoredEntry {
                value,
                deadline: Deadline::start(options, Instant::now()),
            },
        );

        if let Some(max_entries) = self.max_entries {
            Self::enforce_capacity(&mut state, max_entries);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.state.write().await.remove(key);
        Ok(())
    }
}
