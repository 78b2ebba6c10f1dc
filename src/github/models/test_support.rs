//! Fixture builders for `Repository` values.
//!
//! # Examples
//!
//! ```
//! use octoscroll::github::models::test_support::{repository, repositories};
//!
//! let single = repository(1);
//! assert_eq!(single.name, "repo-1");
//!
//! let page = repositories(21, 20);
//! assert_eq!(page.len(), 20);
//! assert_eq!(page.first().map(|repo| repo.id), Some(21));
//! ```

use super::Repository;

/// Creates a repository whose fields are derived from `id`.
#[must_use]
pub fn repository(id: u64) -> Repository {
    Repository {
        id,
        name: format!("repo-{id}"),
        html_url: format!("https://github.com/octocat/repo-{id}"),
        owner_avatar_url: Some("https://avatars.githubusercontent.com/u/583231".to_owned()),
        forks_count: id,
        stargazers_count: id.saturating_mul(2),
        language: Some("Rust".to_owned()),
    }
}

/// Creates `count` repositories with sequential IDs starting at `first_id`.
#[must_use]
pub fn repositories(first_id: u64, count: u64) -> Vec<Repository> {
    (first_id..first_id.saturating_add(count))
        .map(repository)
        .collect()
}
