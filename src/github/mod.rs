//! GitHub access for the repository search.
//!
//! This module wraps Octocrab to list a user's public repositories one page at
//! a time. Errors are mapped into [`GitHubError`] variants so callers can log
//! precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use error::GitHubError;
pub use gateway::{OctocrabRepositoryGateway, RepositoryGateway};
pub use locator::{ApiBase, PersonalAccessToken, UserLocator, UserName};
pub use models::Repository;
pub use pagination::{PAGE_SIZE, PageRequest, RepositoryPage};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockRepositoryGateway;
