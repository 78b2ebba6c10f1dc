//! UI components for the repository search TUI.

mod repository_list;

pub use repository_list::{CARD_HEIGHT, RepositoryListComponent, RepositoryListViewContext};
