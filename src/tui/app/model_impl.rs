//! `Model` trait implementation for the search TUI application.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::SearchApp;
use crate::search::SearchSettings;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for SearchApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the driver and settings from module-level storage
        let model = crate::tui::search_context().map_or_else(
            || Self::new(SearchSettings::default(), None),
            |context| {
                Self::new(context.settings, Some(context.driver.clone()))
                    .with_initial_user(context.initial_user.clone())
            },
        );

        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            return map_key_to_message(key_msg).and_then(|mapped| self.handle_message(&mapped));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            return self.handle_message(&AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_search_bar());
        output.push_str(&self.render_error_line());
        output.push_str(&self.render_list());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl SearchApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after a resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
