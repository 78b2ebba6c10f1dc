//! Message types for the TUI update loop.

use crate::search::SearchEvent;

/// Messages for the repository search TUI.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Search input
    /// A printable character was typed into the search field.
    InputChar(char),
    /// Delete the last character of the search field.
    Backspace,
    /// Empty the search field.
    ClearInput,
    /// Run the search (Enter).
    Submit,

    // Scrolling
    /// Scroll down one row.
    ScrollDown,
    /// Scroll up one row.
    ScrollUp,
    /// Scroll down one screen.
    PageDown,
    /// Scroll up one screen.
    PageUp,
    /// Jump to the end of the list.
    ScrollToEnd,
    /// Start the animated scroll back to the top.
    ScrollToTop,
    /// Advance the scroll-to-top animation by one frame.
    AnimationFrame,

    // Async results
    /// A fetch result or timer fired; forwarded to the search session.
    Search(SearchEvent),

    // Application lifecycle
    /// Synthetic start-up message.
    Initialized,
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
