//! Shared fakes for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use resilient_cache::{CacheError, CacheEvent, CacheEventSink, EntryOptions, HashMapStore, Store};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How a [`FlakyStore`] fails.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Transient,
    Permanent,
}

/// In-memory store that fails its first `n` reads.
pub struct FlakyStore {
    inner: HashMapStore,
    failing_reads: AtomicUsize,
    failure: Failure,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl FlakyStore {
    pub fn new(failing_reads: usize, failure: Failure) -> Self {
        FlakyStore {
            inner: HashMapStore::default(),
            failing_reads: AtomicUsize::new(failing_reads),
            failure,
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    /// A store whose reads never succeed.
    pub fn always(failure: Failure) -> Self {
        Self::new(usize::MAX, failure)
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn peek(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.unwrap()
    }
}

#[async_trait]
impl Store for FlakyStore {
    fn name(&self) -> &'static str {
        "flaky"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failing_reads.load(Ordering::SeqCst);
        if remaining > 0 {
            if remaining != usize::MAX {
                self.failing_reads.fetch_sub(1, Ordering::SeqCst);
            }
            return Err(match self.failure {
                Failure::Transient => CacheError::transient(self.name(), key, "connection reset"),
                Failure::Permanent => CacheError::operation(self.name(), key, "WRONGTYPE"),
            });
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String, options: EntryOptions) -> Result<(), CacheError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value, options).await
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.inner.remove(key).await
    }
}

/// Keeps every event it receives.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<CacheEvent>>,
}

impl RecordingSink {
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|e| e.kind()).collect()
    }
}

impl CacheEventSink for RecordingSink {
    fn emit(&self, event: CacheEvent) {
        self.events.lock().unwrap().push(event);
    }
}
