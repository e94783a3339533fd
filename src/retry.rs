//! Retry with exponential backoff for transient failures.

use std::future::Future;
use std::time::Duration;

use crate::error::CacheError;

/// Bounded retry on [`CacheError::Transient`] failures.
///
/// The delay before retry `n` (1-based) is `backoff_unit * 2^n`. With the
/// default unit of one second and three retries that is 2s, 4s, 8s. Every
/// other error kind is returned on the spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new(3, Duration::from_secs(1))
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, backoff_unit: Duration) -> Self {
        RetryPolicy {
            max_retries,
            backoff_unit,
        }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Delay slept before retry number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.backoff_unit.saturating_mul(factor)
    }

    /// Run `op` until it succeeds, fails with a non-transient error, or the
    /// retries run out. The last error is returned after exhaustion.
    pub async fn execute<F, Fut, T>(&self, mut op: F) -> Result<T, CacheError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, CacheError>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.delay_for(attempt);
                    tracing::warn!(
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient cache failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    if err.is_transient() {
                        tracing::warn!(retries = attempt, error = %err, "retries exhausted");
                    }
                    return Err(err);
                }
            }
        }
    }
}
