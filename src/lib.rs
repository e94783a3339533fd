//! resilient-cache - A cache-aside facade with retry and expiry policies
//!
//! This library provides:
//! - Cache-aside reads: return the stored value, or compute, store and return it
//! - Bounded retries with exponential backoff on transient store failures
//! - Absolute and sliding expiry on every write
//! - Pluggable string stores (in-memory, Moka, Redis)
//! - Get/miss/put event hooks
//!
//! # Example
//!
//! ```ignore
//! use resilient_cache::{HashMapStore, ResilientCacheBuilder};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), resilient_cache::CacheError> {
//!     let cache = ResilientCacheBuilder::new(Arc::new(HashMapStore::default())).build();
//!
//!     // Computed on the first call, served from the store afterwards.
//!     let greeting = cache
//!         .get_string("greeting", || async { Ok("hello".to_string()) }, None)
//!         .await?;
//!
//!     // Typed values are stored as JSON.
//!     cache.set("scores", &vec![10, 20], Some(Duration::from_secs(60))).await?;
//!     Ok(())
//! }
//! ```

mod builder;
mod cache;
mod config;
mod entry;
mod error;
mod events;
mod key;
mod policy;
mod retry;
mod store;
pub mod stores;
mod utils;

// Re-export public API
pub use builder::ResilientCacheBuilder;
pub use cache::ResilientCache;
pub use config::{CacheConfig, DEFAULT_TTL, SlidingExpiration};
pub use entry::EntryOptions;
pub use error::CacheError;
pub use events::{CacheEvent, CacheEventSink, NoopSink, TracingSink};
pub use key::CacheKey;
pub use policy::{CachePolicy, Pipeline};
pub use retry::RetryPolicy;
pub use store::Store;
pub use stores::memory::{HashMapStore, HashMapStoreConfig};
pub use stores::moka::{MokaStore, MokaStoreConfig};
pub use stores::redis::{RedisStore, RedisStoreConfig};
