use std::fmt;

use crate::error::CacheError;

/// Caller-supplied identity of one cache slot.
///
/// The same key is used for the store lookup and as the correlation id in
/// events and logs. Keys are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Create a key, rejecting the empty string.
    pub fn new(key: impl Into<String>) -> Result<Self, CacheError> {
        let key = key.into();
        if key.is_empty() {
            return Err(CacheError::InvalidKey("key must not be empty".to_string()));
        }
        Ok(CacheKey(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
