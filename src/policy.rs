//! Cache-aside policy and its composition with the retry policy.

use std::future::Future;
use std::sync::Arc;

use crate::entry::EntryOptions;
use crate::error::CacheError;
use crate::events::{CacheEvent, CacheEventSink};
use crate::key::CacheKey;
use crate::retry::RetryPolicy;
use crate::store::Store;

/// Read-through/write-through policy over a [`Store`].
///
/// One execution reads the key, and on a miss runs the supplier and writes its
/// result. Store failures are returned as-is; there is no separate error hook.
#[derive(Clone)]
pub struct CachePolicy {
    store: Arc<dyn Store>,
    sink: Arc<dyn CacheEventSink>,
}

impl CachePolicy {
    pub fn new(store: Arc<dyn Store>, sink: Arc<dyn CacheEventSink>) -> Self {
        CachePolicy { store, sink }
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Return the stored value for `key`, or compute, store and return it.
    ///
    /// The supplier is only called on a miss. Read happens before compute,
    /// compute before write.
    pub async fn execute<F, Fut>(
        &self,
        key: &CacheKey,
        options: EntryOptions,
        supplier: &F,
    ) -> Result<String, CacheError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<String, CacheError>>,
    {
        self.sink.emit(CacheEvent::Get { key: key.clone() });
        if let Some(value) = self.store.get(key.as_str()).await? {
            return Ok(value);
        }

        self.sink.emit(CacheEvent::Miss { key: key.clone() });
        let value = supplier().await?;

        self.store.set(key.as_str(), value.clone(), options).await?;
        self.sink.emit(CacheEvent::Put { key: key.clone() });

        Ok(value)
    }
}

/// A [`CachePolicy`] wrapped by a [`RetryPolicy`].
///
/// Built once and shared; the key and expiry are call parameters. A transient
/// failure anywhere in read, compute or write restarts the whole sequence.
#[derive(Clone)]
pub struct Pipeline {
    retry: RetryPolicy,
    cache: CachePolicy,
}

impl Pipeline {
    pub fn new(retry: RetryPolicy, cache: CachePolicy) -> Self {
        Pipeline { retry, cache }
    }

    pub fn cache(&self) -> &CachePolicy {
        &self.cache
    }

    pub async fn execute<F, Fut>(
        &self,
        key: &CacheKey,
        options: EntryOptions,
        supplier: F,
    ) -> Result<String, CacheError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<String, CacheError>>,
    {
        let supplier = &supplier;
        self.retry
            .execute(|| self.cache.execute(key, options, supplier))
            .await
    }
}
