//! Rate limit reset reporting.
//!
//! Unauthenticated requests to GitHub are limited to 60 per hour, so a
//! scrolling session can exhaust the quota quickly. When a request is rejected
//! for that reason the gateway queries `/rate_limit` and attaches the reset
//! time to the error, which ends up in the log.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// When the exhausted request window reopens.
///
/// # Example
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
///
/// use octoscroll::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(1_700_000_000);
/// let now = UNIX_EPOCH + Duration::from_secs(1_699_999_940);
/// assert_eq!(info.seconds_until_reset(now), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    reset_at: u64,
}

impl RateLimitInfo {
    /// Wraps the Unix timestamp GitHub reports for the reset.
    #[must_use]
    pub const fn new(reset_at: u64) -> Self {
        Self { reset_at }
    }

    /// Unix timestamp when the window resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Seconds from `now` until the reset; 0 once it has passed.
    #[must_use]
    pub fn seconds_until_reset(&self, now: SystemTime) -> u64 {
        let elapsed = now
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs();
        self.reset_at.saturating_sub(elapsed)
    }
}
