//! Shared utilities for the cache library.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Build a physical store key from an optional prefix and a cache key.
///
/// Format: `{prefix}::{key}`, or just `{key}` without a prefix.
pub fn build_cache_key(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}::{}", prefix, key),
        None => key.to_string(),
    }
}

/// Get the current time in milliseconds since UNIX epoch.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}

/// Whole milliseconds in `duration`, never less than 1. Saturates at `u64::MAX`.
///
/// Stores that take millisecond expiries treat 0 as "no expiry" or reject it,
/// so sub-millisecond durations round up.
pub fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis())
        .unwrap_or(u64::MAX)
        .max(1)
}
