use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::key::CacheKey;
use crate::policy::Pipeline;
use crate::store::Store;
use crate::utils::duration_ms;

/// High-level cache-aside API with retry and expiry policies.
///
/// `get` returns the cached value when there is one, otherwise it runs the
/// supplier, stores the result and returns it. The whole read-or-compute-then-write
/// sequence is retried on transient store failures. `set` writes directly,
/// without the retry policy.
///
/// Values are kept as strings in the store. The `_string` methods store the text
/// verbatim; the typed methods go through JSON.
///
/// Concurrent misses for the same key are not coalesced: each call may run its
/// supplier and write, and the last write wins.
///
/// Create one with [`ResilientCacheBuilder`](crate::ResilientCacheBuilder).
#[derive(Clone)]
pub struct ResilientCache {
    pipeline: Pipeline,
    config: CacheConfig,
}

impl ResilientCache {
    pub(crate) fn new(pipeline: Pipeline, config: CacheConfig) -> Self {
        ResilientCache { pipeline, config }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<dyn Store> {
        self.pipeline.cache().store()
    }

    /// Return the cached string, or compute and cache it.
    ///
    /// `ttl` defaults to the configured `default_ttl`. An empty result comes back
    /// as an empty string.
    ///
    /// # Example
    /// ```ignore
    /// let value = cache
    ///     .get_string("key", || async { Ok("obj1".to_string()) }, None)
    ///     .await?;
    /// ```
    pub async fn get_string<F, Fut>(
        &self,
        key: &str,
        supplier: F,
        ttl: Option<Duration>,
    ) -> Result<String, CacheError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<String, CacheError>>,
    {
        let key = CacheKey::new(key)?;
        let options = self.config.entry_options(ttl)?;
        self.pipeline.execute(&key, options, supplier).await
    }

    /// Return the cached value decoded from JSON, or compute, encode and cache it.
    ///
    /// An empty stored value yields `T::default()`. A supplied value that fails
    /// to encode, or a stored value that fails to decode, is a
    /// [`CacheError::Serialization`] and is not retried.
    ///
    /// # Example
    /// ```ignore
    /// let user: User = cache
    ///     .get("user:1", || async { db.load_user(1).await }, Some(Duration::from_secs(60)))
    ///     .await?;
    /// ```
    pub async fn get<T, F, Fut>(
        &self,
        key: &str,
        supplier: F,
        ttl: Option<Duration>,
    ) -> Result<T, CacheError>
    where
        T: Serialize + DeserializeOwned + Default,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, CacheError>>,
    {
        let supplier = &supplier;
        let encoded = move || async move {
            let value = supplier().await?;
            Ok::<_, CacheError>(serde_json::to_string(&value)?)
        };

        let raw = self.get_string(key, encoded, ttl).await?;
        decode(&raw)
    }

    /// Store a string verbatim, replacing any previous value.
    pub async fn set_string(
        &self,
        key: &str,
        value: impl Into<String>,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let key = CacheKey::new(key)?;
        let options = self.config.entry_options(ttl)?;
        self.store().set(key.as_str(), value.into(), options).await?;
        tracing::debug!(key = %key, ttl_ms = duration_ms(options.absolute_ttl), "cache set");
        Ok(())
    }

    /// Store a value as JSON, replacing any previous value.
    pub async fn set<T>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<(), CacheError>
    where
        T: Serialize + ?Sized,
    {
        let encoded = serde_json::to_string(value)?;
        self.set_string(key, encoded, ttl).await
    }
}

fn decode<T>(raw: &str) -> Result<T, CacheError>
where
    T: DeserializeOwned + Default,
{
    if raw.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(raw)
        .map_err(|e| CacheError::Serialization(format!("Deserialization failed: {}", e)))
}
