//! Builder API for creating [`ResilientCache`] instances.

use std::sync::Arc;

use crate::cache::ResilientCache;
use crate::config::CacheConfig;
use crate::events::{CacheEventSink, TracingSink};
use crate::policy::{CachePolicy, Pipeline};
use crate::retry::RetryPolicy;
use crate::store::Store;

/// Builder for [`ResilientCache`].
///
/// The retry and cache policies are assembled once in [`build`](Self::build)
/// and reused by every call on the resulting cache.
///
/// # Example
///
/// ```ignore
/// use resilient_cache::{CacheConfig, HashMapStore, ResilientCacheBuilder};
/// use std::sync::Arc;
///
/// let cache = ResilientCacheBuilder::new(Arc::new(HashMapStore::default()))
///     .config(CacheConfig::from_env())
///     .build();
/// ```
pub struct ResilientCacheBuilder {
    store: Arc<dyn Store>,
    config: CacheConfig,
    sink: Arc<dyn CacheEventSink>,
}

impl ResilientCacheBuilder {
    /// Create a builder over the given store, with default configuration and
    /// events logged through `tracing`.
    pub fn new(store: Arc<dyn Store>) -> Self {
        ResilientCacheBuilder {
            store,
            config: CacheConfig::default(),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn config(mut self, config: CacheConfig) -> Self {
        self.config = config;
        self
    }

    /// Send get/miss/put events to `sink` instead of the log.
    pub fn event_sink(mut self, sink: Arc<dyn CacheEventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn build(self) -> ResilientCache {
        let retry = RetryPolicy::new(self.config.max_retries, self.config.backoff_unit);
        let cache = CachePolicy::new(self.store, self.sink);
        ResilientCache::new(Pipeline::new(retry, cache), self.config)
    }
}
