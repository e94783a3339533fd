//! Configuration for the resilient cache.
//!
//! Values can come from code, from [`CacheConfig::default`], or from
//! environment variables through [`CacheConfig::from_env`].

use std::env;
use std::time::Duration;

use crate::entry::EntryOptions;
use crate::error::CacheError;

/// Default lifetime of a cache entry.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Sliding window attached to every write, next to the absolute expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlidingExpiration {
    /// Slide by the configured `default_ttl`, whatever TTL the caller passed.
    #[default]
    DefaultTtl,
    /// Slide by the TTL resolved for the write.
    MatchTtl,
    /// Absolute expiry only.
    Disabled,
}

impl SlidingExpiration {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Some(SlidingExpiration::DefaultTtl),
            "ttl" => Some(SlidingExpiration::MatchTtl),
            "off" | "none" | "disabled" => Some(SlidingExpiration::Disabled),
            _ => None,
        }
    }
}

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL used when a call does not pass one.
    pub default_ttl: Duration,
    /// Sliding window policy for writes.
    pub sliding: SlidingExpiration,
    /// Retries after the first attempt for transient store failures.
    pub max_retries: u32,
    /// Backoff before retry `n` is `backoff_unit * 2^n`.
    pub backoff_unit: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
            sliding: SlidingExpiration::DefaultTtl,
            max_retries: 3,
            backoff_unit: Duration::from_secs(1),
        }
    }
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL_SECS` - Default TTL in seconds (default: 300)
    /// - `CACHE_SLIDING_EXPIRATION` - `default`, `ttl` or `off` (default: `default`)
    /// - `CACHE_MAX_RETRIES` - Retries for transient failures (default: 3)
    /// - `CACHE_BACKOFF_UNIT_MS` - Backoff unit in milliseconds (default: 1000)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`CacheConfig::from_env`] with a custom variable source.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            default_ttl: lookup("CACHE_DEFAULT_TTL_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.default_ttl),
            sliding: lookup("CACHE_SLIDING_EXPIRATION")
                .and_then(|v| SlidingExpiration::parse(&v))
                .unwrap_or(defaults.sliding),
            max_retries: lookup("CACHE_MAX_RETRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            backoff_unit: lookup("CACHE_BACKOFF_UNIT_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.backoff_unit),
        }
    }

    /// Resolve the TTL for one call.
    pub fn resolve_ttl(&self, ttl: Option<Duration>) -> Result<Duration, CacheError> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl(
                "time-to-live must be greater than zero".to_string(),
            ));
        }
        Ok(ttl)
    }

    /// Expiry settings for a write with the given caller TTL.
    pub fn entry_options(&self, ttl: Option<Duration>) -> Result<EntryOptions, CacheError> {
        let ttl = self.resolve_ttl(ttl)?;
        let options = EntryOptions::new(ttl);
        Ok(match self.sliding {
            SlidingExpiration::DefaultTtl => options.with_sliding(self.default_ttl),
            SlidingExpiration::MatchTtl => options.with_sliding(ttl),
            SlidingExpiration::Disabled => options,
        })
    }
}
