//! Observability hooks for the cache policy.
//!
//! The cache policy emits a [`CacheEvent`] on every store read, on every miss
//! and after every successful write. Events go to a user-provided
//! [`CacheEventSink`]; the default sink logs them through `tracing`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Mutex;
//! use resilient_cache::{CacheEvent, CacheEventSink};
//!
//! struct BufferedSink {
//!     buffer: Mutex<Vec<CacheEvent>>,
//! }
//!
//! impl CacheEventSink for BufferedSink {
//!     fn emit(&self, event: CacheEvent) {
//!         self.buffer.lock().unwrap().push(event);
//!     }
//! }
//! ```

use std::fmt;

use crate::key::CacheKey;

/// Event emitted by the cache policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    /// A store read was attempted.
    Get { key: CacheKey },
    /// The store held no value for the key.
    Miss { key: CacheKey },
    /// A computed value was written to the store.
    Put { key: CacheKey },
}

impl CacheEvent {
    pub fn key(&self) -> &CacheKey {
        match self {
            CacheEvent::Get { key } | CacheEvent::Miss { key } | CacheEvent::Put { key } => key,
        }
    }

    /// Short label: `get`, `miss` or `put`.
    pub fn kind(&self) -> &'static str {
        match self {
            CacheEvent::Get { .. } => "get",
            CacheEvent::Miss { .. } => "miss",
            CacheEvent::Put { .. } => "put",
        }
    }
}

impl fmt::Display for CacheEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.kind(), self.key())
    }
}

/// Trait for receiving cache events.
///
/// `emit` is called synchronously in the hot path of every cache operation.
/// Implementations must be fast and must not block (e.g., buffer in memory).
/// A sink cannot influence the outcome of the operation.
pub trait CacheEventSink: Send + Sync {
    fn emit(&self, event: CacheEvent);
}

/// Logs every event at `debug` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl CacheEventSink for TracingSink {
    fn emit(&self, event: CacheEvent) {
        tracing::debug!(event = event.kind(), key = %event.key(), "cache event");
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl CacheEventSink for NoopSink {
    fn emit(&self, _event: CacheEvent) {}
}
