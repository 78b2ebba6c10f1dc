//! Terminal user interface for the repository search.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: [`app::SearchApp`], which wraps a
//!   [`SearchSession`](crate::search::SearchSession) with viewport state
//! - **View**: the search bar, the repository cards, and a status line
//! - **Update**: key presses become [`messages::AppMsg`] values, which in
//!   turn become search events; fetch and timer effects run as commands
//!
//! # Start-up context
//!
//! bubbletea-rs calls `Model::init()` as a static function, so the gateway
//! driver, settings, and optional start-up username are stored in module
//! level storage by [`set_search_context`] before the program starts.

use std::sync::OnceLock;

use crate::search::{SearchDriver, SearchSettings};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::SearchApp;

/// Layout units per terminal row.
///
/// Scroll thresholds are expressed in the units a browser would measure in
/// pixels; one row of text counts as this many.
pub const UNITS_PER_ROW: u32 = 20;

static SEARCH_CONTEXT: OnceLock<SearchContext> = OnceLock::new();

/// Everything `SearchApp::init()` needs.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Executes repository fetches.
    pub driver: SearchDriver,
    /// Session tunables.
    pub settings: SearchSettings,
    /// Username to search for immediately, if any.
    pub initial_user: Option<String>,
}

/// Stores the start-up context for the TUI.
///
/// Returns `true` if the context was set, `false` if it was already set.
pub fn set_search_context(context: SearchContext) -> bool {
    SEARCH_CONTEXT.set(context).is_ok()
}

/// Returns the stored start-up context, if one was set.
pub(crate) fn search_context() -> Option<&'static SearchContext> {
    SEARCH_CONTEXT.get()
}
