//! Rendering logic for the search TUI.
//!
//! These are pure query methods that read state without modification.

use super::SearchApp;
use crate::tui::components::RepositoryListComponent;

const TITLE: &str = "octoscroll - GitHub repositories";
const HINTS: &str = "Enter:search  Up/Down PgUp/PgDn:scroll  Ctrl-U:clear  Esc:quit";
const TO_TOP_HINT: &str = "Home: back to top";

impl SearchApp {
    /// Renders the header bar with the loading indicator.
    pub(super) fn render_header(&self) -> String {
        let loading = if self.session.spinner_visible() {
            " [Loading...]"
        } else {
            ""
        };
        format!("{TITLE}{loading}\n")
    }

    /// Renders the search field.
    pub(super) fn render_search_bar(&self) -> String {
        format!("Search: {}_\n", self.session.user_name())
    }

    /// Renders the error line, blank when there is no error.
    pub(super) fn render_error_line(&self) -> String {
        self.session
            .error()
            .map_or_else(|| "\n".to_owned(), |error| format!("{error}\n"))
    }

    /// Renders the visible part of the repository list, padded to the list
    /// height so the status bar stays at the bottom.
    pub(super) fn render_list(&self) -> String {
        let ctx = self.list_context();
        let mut output = RepositoryListComponent::view(&ctx);
        let rendered = output.lines().count();
        for _ in rendered..ctx.visible_height {
            output.push('\n');
        }
        output
    }

    /// Renders the status bar with key hints and the back-to-top control.
    pub(super) fn render_status_bar(&self) -> String {
        if self.session.show_to_top() {
            format!("{TO_TOP_HINT}  {HINTS}\n")
        } else {
            format!("{HINTS}\n")
        }
    }
}
