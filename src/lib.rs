//! Octoscroll library crate: browse a GitHub user's repositories with
//! infinite scroll.
//!
//! The [`search`] module holds the search state machine, [`github`] lists
//! repositories through Octocrab one page at a time, and [`tui`] renders the
//! session in the terminal with bubbletea-rs.

pub mod config;
pub mod github;
pub mod logging;
pub mod search;
pub mod tui;

pub use config::{OctoscrollConfig, OperationMode};
pub use github::{
    ApiBase, GitHubError, OctocrabRepositoryGateway, PersonalAccessToken, Repository,
    RepositoryGateway, UserLocator, UserName,
};
pub use search::{SearchDriver, SearchEvent, SearchSession, SearchSettings};
