//! Gateways for listing a user's repositories through Octocrab.
//!
//! The trait-based design lets the search driver and the TUI run against
//! mocks in tests while the Octocrab implementation handles real HTTP.

mod client;
mod error_mapping;
mod repository;

pub use repository::OctocrabRepositoryGateway;

use async_trait::async_trait;

use crate::github::error::GitHubError;
use crate::github::locator::UserLocator;
use crate::github::pagination::{PageRequest, RepositoryPage};

/// Gateway that can list one page of a user's repositories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Fetch the requested page of `GET /users/{user}/repos`.
    async fn list_user_repositories(
        &self,
        locator: &UserLocator,
        request: PageRequest,
    ) -> Result<RepositoryPage, GitHubError>;
}
