//! CLI operation mode handlers.
//!
//! - [`search_tui`]: the interactive infinite-scroll search view
//! - [`listing`]: walk every page for one user and print a summary
//!
//! Output formatting utilities are in [`output`].

pub mod listing;
pub mod output;
pub mod search_tui;
