//! Main TUI application model implementing the MVU pattern.
//!
//! [`SearchApp`] owns a [`SearchSession`] plus the viewport: scroll position,
//! terminal size, and the scroll-to-top animation. Session effects become
//! bubbletea-rs commands.
//!
//! # Module Structure
//!
//! - `fetch_handlers`: turning session effects into commands
//! - `scroll_handlers`: viewport movement and the scroll-to-top animation
//! - `rendering`: view rendering methods for terminal output
//! - `model_impl`: the `bubbletea_rs::Model` implementation

use bubbletea_rs::Cmd;

use crate::search::{
    Effect, ScrollToTop, SearchDriver, SearchEvent, SearchSession, SearchSettings,
};

use super::components::RepositoryListViewContext;
use super::messages::AppMsg;

mod fetch_handlers;
mod model_impl;
mod rendering;
mod scroll_handlers;

/// Rows used by the header, search bar, error line, and status bar.
pub(crate) const CHROME_HEIGHT: u16 = 4;

/// Main application model for the repository search TUI.
#[derive(Debug)]
pub struct SearchApp {
    /// Search state machine.
    pub(crate) session: SearchSession,
    /// Executes fetches; `None` when no context was configured.
    driver: Option<SearchDriver>,
    /// First document row in view.
    pub(crate) scroll_offset: usize,
    /// Running scroll-to-top animation.
    animation: Option<ScrollToTop>,
    /// Effect raised mid-animation, issued when the animation ends.
    deferred_effect: Option<Effect>,
    /// Username searched for on start-up.
    initial_user: Option<String>,
    /// Whether the start-up message has been handled.
    initialized: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
}

impl SearchApp {
    /// Creates an application around a fresh session.
    #[must_use]
    pub fn new(settings: SearchSettings, driver: Option<SearchDriver>) -> Self {
        Self {
            session: SearchSession::new(settings),
            driver,
            scroll_offset: 0,
            animation: None,
            deferred_effect: None,
            initial_user: None,
            initialized: false,
            width: 80,
            height: 24,
        }
    }

    /// Searches for `user` as soon as the program starts.
    #[must_use]
    pub fn with_initial_user(mut self, user: Option<String>) -> Self {
        self.initial_user = user;
        self
    }

    /// Returns the search session.
    #[must_use]
    pub const fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Returns the first visible document row.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Returns true while the scroll-to-top animation runs.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Handles a message and returns a command to run, if any.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InputChar(ch) => {
                let mut text = self.session.user_name().to_owned();
                text.push(*ch);
                self.change_input(text)
            }
            AppMsg::Backspace => {
                let mut text = self.session.user_name().to_owned();
                text.pop();
                self.change_input(text)
            }
            AppMsg::ClearInput => self.change_input(String::new()),
            AppMsg::Submit => self.dispatch(SearchEvent::Submit),
            AppMsg::ScrollDown => self.scroll_down(1),
            AppMsg::ScrollUp => self.scroll_up(1),
            AppMsg::PageDown => self.scroll_down(self.list_height()),
            AppMsg::PageUp => self.scroll_up(self.list_height()),
            AppMsg::ScrollToEnd => self.scroll_down(self.max_scroll_offset()),
            AppMsg::ScrollToTop => self.start_scroll_to_top(),
            AppMsg::AnimationFrame => self.advance_animation(),
            AppMsg::Search(event) => self.dispatch(event.clone()),
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.clamp_scroll();
                None
            }
        }
    }

    fn change_input(&mut self, text: String) -> Option<Cmd> {
        if text == self.session.user_name() {
            return None;
        }
        self.scroll_offset = 0;
        self.animation = None;
        self.deferred_effect = None;
        self.dispatch(SearchEvent::InputChanged(text))
    }

    /// Rows available to the repository list.
    pub(crate) fn list_height(&self) -> usize {
        usize::from(self.height.saturating_sub(CHROME_HEIGHT).max(1))
    }

    pub(crate) fn list_context(&self) -> RepositoryListViewContext<'_> {
        RepositoryListViewContext {
            user_name: self.session.user_name(),
            repositories: self.session.repositories(),
            notification: self.session.notification(),
            scroll_offset: self.scroll_offset,
            visible_height: self.list_height(),
            max_width: usize::from(self.width.saturating_sub(1).max(1)),
        }
    }
}
