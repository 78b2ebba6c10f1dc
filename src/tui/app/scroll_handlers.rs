//! Viewport movement and the scroll-to-top animation.
//!
//! Every movement reports a [`ScrollMetrics`] to the session, measured in
//! layout units of [`UNITS_PER_ROW`] per row, so prefetch and the back-to-top
//! hint use the same thresholds as the browser view.

use std::any::Any;
use std::time::{Duration, Instant};

use bubbletea_rs::Cmd;

use super::SearchApp;
use crate::search::{ScrollMetrics, ScrollToTop, SearchEvent};
use crate::tui::UNITS_PER_ROW;
use crate::tui::components::RepositoryListComponent;
use crate::tui::messages::AppMsg;

/// Delay between scroll-to-top animation frames.
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn rows_to_units(rows: usize) -> u32 {
    u32::try_from(rows)
        .unwrap_or(u32::MAX)
        .saturating_mul(UNITS_PER_ROW)
}

#[expect(
    clippy::integer_division,
    reason = "animation offsets snap to whole rows"
)]
fn units_to_rows(units: u32) -> usize {
    usize::try_from(units / UNITS_PER_ROW).unwrap_or(usize::MAX)
}

impl SearchApp {
    /// Current viewport geometry in layout units.
    pub(crate) fn scroll_metrics(&self) -> ScrollMetrics {
        let ctx = self.list_context();
        ScrollMetrics {
            offset: rows_to_units(self.scroll_offset),
            viewport_height: rows_to_units(self.list_height()),
            document_height: rows_to_units(RepositoryListComponent::document_height(&ctx)),
        }
    }

    pub(super) fn max_scroll_offset(&self) -> usize {
        let ctx = self.list_context();
        RepositoryListComponent::document_height(&ctx).saturating_sub(self.list_height())
    }

    pub(super) fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    pub(super) fn scroll_down(&mut self, rows: usize) -> Option<Cmd> {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(rows)
            .min(self.max_scroll_offset());
        self.cancel_animation();
        self.report_scroll()
    }

    pub(super) fn scroll_up(&mut self, rows: usize) -> Option<Cmd> {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
        self.cancel_animation();
        self.report_scroll()
    }

    /// Reports the viewport to the session, which may request the next page.
    fn report_scroll(&mut self) -> Option<Cmd> {
        let metrics = self.scroll_metrics();
        self.dispatch(SearchEvent::Scrolled {
            metrics,
            at: Instant::now(),
        })
    }

    fn cancel_animation(&mut self) {
        self.animation = None;
    }

    /// Starts the smooth scroll back to the top.
    ///
    /// Only available while the back-to-top hint is shown, and ignored while
    /// an animation is already running.
    pub(super) fn start_scroll_to_top(&mut self) -> Option<Cmd> {
        let offset = rows_to_units(self.scroll_offset);
        if offset == 0 || self.animation.is_some() || !self.session.show_to_top() {
            return None;
        }
        self.animation = Some(ScrollToTop::from_offset(offset));
        Some(Self::frame_cmd())
    }

    /// Moves one animation frame closer to the top.
    ///
    /// A fetch raised by an intermediate frame is held back and issued once
    /// the animation finishes.
    pub(super) fn advance_animation(&mut self) -> Option<Cmd> {
        let units = self.animation.as_mut().and_then(Iterator::next);
        let Some(next_offset) = units else {
            self.animation = None;
            return self.deferred_effect.take().map(|effect| self.command_for(effect));
        };

        self.scroll_offset = units_to_rows(next_offset);
        let metrics = self.scroll_metrics();
        if let Some(effect) = self.session.apply(SearchEvent::Scrolled {
            metrics,
            at: Instant::now(),
        }) {
            self.deferred_effect = Some(effect);
        }

        if self.animation.is_some_and(|animation| !animation.is_finished()) {
            return Some(Self::frame_cmd());
        }

        self.animation = None;
        self.deferred_effect
            .take()
            .map(|effect| self.command_for(effect))
    }

    pub(super) fn frame_cmd() -> Cmd {
        Box::pin(async {
            tokio::time::sleep(FRAME_INTERVAL).await;
            Some(Box::new(AppMsg::AnimationFrame) as Box<dyn Any + Send>)
        })
    }
}
