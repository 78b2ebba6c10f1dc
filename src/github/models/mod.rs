//! Repository records returned by the user repository listing.
//!
//! `ApiRepository` is the internal deserialisation target for the GitHub
//! payload; it converts into the flattened public [`Repository`] type.

use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// One repository card's worth of data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    /// GitHub repository identifier. Unique across pages.
    pub id: u64,
    /// Repository name without the owner prefix.
    pub name: String,
    /// Browser URL of the repository.
    pub html_url: String,
    /// Avatar URL of the owning account.
    pub owner_avatar_url: Option<String>,
    /// Fork count.
    pub forks_count: u64,
    /// Star count.
    pub stargazers_count: u64,
    /// Primary language detected by GitHub, if any.
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) html_url: String,
    #[serde(default)]
    pub(crate) owner: Option<ApiOwner>,
    #[serde(default)]
    pub(crate) forks_count: u64,
    #[serde(default)]
    pub(crate) stargazers_count: u64,
    #[serde(default)]
    pub(crate) language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiOwner {
    #[serde(default)]
    pub(crate) avatar_url: Option<String>,
}

impl From<ApiRepository> for Repository {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: value.id,
            name: value.name,
            html_url: value.html_url,
            owner_avatar_url: value.owner.and_then(|owner| owner.avatar_url),
            forks_count: value.forks_count,
            stargazers_count: value.stargazers_count,
            language: value.language.filter(|language| !language.is_empty()),
        }
    }
}
