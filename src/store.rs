use async_trait::async_trait;

use crate::entry::EntryOptions;
use crate::error::CacheError;

/// A store is a common interface for storing, reading and deleting string values.
///
/// Stores own physical storage and expiry. The cache never inspects raw entries,
/// it only reads and writes strings through this trait.
///
/// Errors caused by the infrastructure (I/O, timeouts, dropped connections) must be
/// reported as [`CacheError::Transient`] so the retry policy can pick them up.
/// Everything else should be [`CacheError::Operation`].
#[async_trait]
pub trait Store: Send + Sync {
    /// A name for logs and errors.
    ///
    /// # Example
    /// - "hashmap"
    /// - "moka"
    /// - "redis"
    fn name(&self) -> &'static str;

    /// Return the stored value.
    ///
    /// The response must be `None` for missing or expired keys. A read refreshes
    /// the sliding window of the entry, if it has one.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Sets the value for the given key, replacing any previous entry and its expiry.
    async fn set(&self, key: &str, value: String, options: EntryOptions) -> Result<(), CacheError>;

    /// Removes the key from the store. Missing keys are not an error.
    async fn remove(&self, key: &str) -> Result<(), CacheError>;
}
