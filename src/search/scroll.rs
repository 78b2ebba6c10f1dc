//! Scroll geometry, throttling, and the scroll-to-top animation.
//!
//! Distances are in layout units. The browser view used pixels; the terminal
//! view converts rows into the same units so the default thresholds carry
//! over.

use std::time::{Duration, Instant};

/// Remaining distance to the document bottom at which the next page loads.
pub const DEFAULT_PREFETCH_DISTANCE: u32 = 1500;

/// Scroll offset beyond which the scroll-to-top control appears.
pub const DEFAULT_TO_TOP_THRESHOLD: u32 = 4500;

/// Minimum gap between two bottom-proximity checks.
pub const DEFAULT_SCROLL_THROTTLE: Duration = Duration::from_millis(500);

/// Viewport position within the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top (`scrollY`).
    pub offset: u32,
    /// Height of the visible area (`innerHeight`).
    pub viewport_height: u32,
    /// Height of the whole document (`document.body.offsetHeight`).
    pub document_height: u32,
}

impl ScrollMetrics {
    /// Distance between the bottom of the viewport and the end of the
    /// document. Zero once the viewport reaches or passes the end.
    #[must_use]
    pub const fn distance_to_bottom(&self) -> u32 {
        self.document_height
            .saturating_sub(self.offset.saturating_add(self.viewport_height))
    }
}

/// Thresholds for scroll-driven behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPolicy {
    /// Bottom distance at or below which the next page is requested.
    pub prefetch_distance: u32,
    /// Offset above which the scroll-to-top control is shown.
    pub to_top_threshold: u32,
    /// Throttle window for bottom-proximity checks.
    pub throttle: Duration,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            prefetch_distance: DEFAULT_PREFETCH_DISTANCE,
            to_top_threshold: DEFAULT_TO_TOP_THRESHOLD,
            throttle: DEFAULT_SCROLL_THROTTLE,
        }
    }
}

impl ScrollPolicy {
    /// Returns true when the viewport is close enough to the bottom to load
    /// more.
    #[must_use]
    pub const fn is_near_bottom(&self, metrics: &ScrollMetrics) -> bool {
        metrics.distance_to_bottom() <= self.prefetch_distance
    }

    /// Returns true when the scroll-to-top control should be visible.
    #[must_use]
    pub const fn shows_to_top(&self, metrics: &ScrollMetrics) -> bool {
        metrics.offset > self.to_top_threshold
    }
}

/// Fixed-window throttle.
///
/// A check is admitted when more than the interval has passed since the last
/// admitted check; rejected checks do not move the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollThrottle {
    interval: Duration,
    last_admitted: Option<Instant>,
}

impl ScrollThrottle {
    /// Creates a throttle that admits its first check.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_admitted: None,
        }
    }

    /// Admits or rejects a check at `now`.
    pub fn admit(&mut self, now: Instant) -> bool {
        let admitted = self
            .last_admitted
            .is_none_or(|last| now.saturating_duration_since(last) > self.interval);
        if admitted {
            self.last_admitted = Some(now);
        }
        admitted
    }

    /// Forgets the last admitted check.
    pub const fn reset(&mut self) {
        self.last_admitted = None;
    }
}

/// Smooth scroll back to the top.
///
/// Each frame halves the remaining offset, so the sequence always reaches
/// zero.
///
/// ```
/// use octoscroll::search::ScrollToTop;
///
/// let frames: Vec<u32> = ScrollToTop::from_offset(10).collect();
/// assert_eq!(frames, vec![5, 2, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollToTop {
    remaining: u32,
}

impl ScrollToTop {
    /// Starts an animation from the given offset.
    #[must_use]
    pub const fn from_offset(offset: u32) -> Self {
        Self { remaining: offset }
    }

    /// Offset the animation has not yet covered.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns true once the top has been reached.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

impl Iterator for ScrollToTop {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining >>= 1;
        Some(self.remaining)
    }
}
