use std::time::Duration;
use tokio::time::Instant;

/// Longest lifetime any entry is given, roughly 30 years.
///
/// Longer TTLs are accepted and clamped so expiry arithmetic never overflows.
pub const MAX_LIFETIME: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Expiry settings attached to every write.
///
/// An entry expires `absolute_ttl` after it was written. With a sliding
/// window it also expires once it has gone unread for `sliding`, whichever
/// comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryOptions {
    /// Lifetime measured from the write.
    pub absolute_ttl: Duration,
    /// Idle window, reset by every read.
    pub sliding: Option<Duration>,
}

impl EntryOptions {
    /// Absolute expiry only.
    pub fn new(absolute_ttl: Duration) -> Self {
        EntryOptions {
            absolute_ttl,
            sliding: None,
        }
    }

    /// Add a sliding window.
    pub fn with_sliding(mut self, window: Duration) -> Self {
        self.sliding = Some(window);
        self
    }

    /// Lifetime of a freshly written entry.
    pub fn initial_lifetime(&self) -> Duration {
        self.lifetime_after(Duration::ZERO)
    }

    /// Lifetime left after a read that happens `since_write` after the write.
    ///
    /// Returns `Duration::ZERO` once the absolute deadline has passed, and
    /// never more than [`MAX_LIFETIME`].
    pub fn lifetime_after(&self, since_write: Duration) -> Duration {
        let absolute_left = self.absolute_ttl.saturating_sub(since_write);
        let lifetime = match self.sliding {
            Some(window) => window.min(absolute_left),
            None => absolute_left,
        };
        lifetime.min(MAX_LIFETIME)
    }
}

/// Expiry bookkeeping for an entry held in process memory.
///
/// Uses `tokio::time::Instant` so paused-clock tests can drive expiry.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    written_at: Instant,
    options: EntryOptions,
    expires_at: Instant,
}

impl Deadline {
    /// Start tracking an entry written at `now`.
    pub fn start(options: EntryOptions, now: Instant) -> Self {
        Deadline {
            written_at: now,
            options,
            expires_at: expiry_from(now, options.initial_lifetime()),
        }
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Check if the entry has expired and should not be used.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Record a read at `now`, extending a sliding window up to the absolute deadline.
    pub fn touch(&mut self, now: Instant) {
        if self.options.sliding.is_some() {
            let since_write = now.saturating_duration_since(self.written_at);
            self.expires_at = expiry_from(now, self.options.lifetime_after(since_write));
        }
    }
}

/// `now + lifetime`; an instant the clock cannot represent expires immediately.
fn expiry_from(now: Instant, lifetime: Duration) -> Instant {
    now.checked_add(lifetime).unwrap_or(now)
}
