/// Error type for cache operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    /// An infrastructure failure (I/O, timeout, dropped connection) that is
    /// expected to succeed when tried again.
    #[error("[{store}] transient failure for key '{key}': {message}")]
    Transient {
        store: String,
        key: String,
        message: String,
    },
    /// A store operation failed permanently.
    #[error("[{store}] cache error for key '{key}': {message}")]
    Operation {
        store: String,
        key: String,
        message: String,
    },
    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The cache key was rejected.
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),
    /// The time-to-live was rejected.
    #[error("Invalid time-to-live: {0}")]
    InvalidTtl(String),
    /// The value producer failed.
    #[error("Value producer failed: {0}")]
    Origin(String),
}

impl CacheError {
    /// Create a new transient error.
    pub fn transient(
        store: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CacheError::Transient {
            store: store.into(),
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a new operation error.
    pub fn operation(
        store: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CacheError::Operation {
            store: store.into(),
            key: key.into(),
            message: message.into(),
        }
    }

    /// Whether the retry policy may run the operation again.
    pub fn is_transient(&self) -> bool {
        matches!(self, CacheError::Transient { .. })
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}
