//! Key-to-message mapping.
//!
//! The search field always has focus, so printable characters are text.
//! Navigation lives on the arrow and paging keys.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c' | 'q') => Some(AppMsg::Quit),
            KeyCode::Char('u') => Some(AppMsg::ClearInput),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Enter => Some(AppMsg::Submit),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Down => Some(AppMsg::ScrollDown),
        KeyCode::Up => Some(AppMsg::ScrollUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home => Some(AppMsg::ScrollToTop),
        KeyCode::End => Some(AppMsg::ScrollToEnd),
        KeyCode::Char(ch) if !ch.is_control() => Some(AppMsg::InputChar(ch)),
        _ => None,
    }
}
