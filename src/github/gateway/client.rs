//! Octocrab client construction.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::GitHubError;
use crate::github::locator::{ApiBase, PersonalAccessToken};

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given API base.
///
/// Without a token the client makes anonymous requests, which GitHub allows
/// for public repository listings at a lower rate limit.
///
/// # Errors
///
/// Returns `GitHubError::InvalidUrl` when the base URI cannot be parsed or
/// `GitHubError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &ApiBase,
) -> Result<Octocrab, GitHubError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| GitHubError::InvalidUrl(error.to_string()))?;

    let builder = Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| GitHubError::Api {
            message: format!("build client failed: {error}"),
        })?;

    let built = match token {
        Some(personal_token) => builder.personal_token(personal_token.as_ref()).build(),
        None => builder.build(),
    };

    built.map_err(|error| map_octocrab_error("build client", &error))
}
