//! Octocrab-backed listing of a user's repositories.

use std::time::SystemTime;

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::github::error::GitHubError;
use crate::github::locator::{ApiBase, PersonalAccessToken, UserLocator};
use crate::github::models::{ApiRepository, Repository};
use crate::github::pagination::{PageRequest, RepositoryPage};
use crate::github::rate_limit::RateLimitInfo;

use super::RepositoryGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{is_rate_limit_error, map_octocrab_error};

const OPERATION: &str = "list repositories";

/// Octocrab-backed repository gateway.
pub struct OctocrabRepositoryGateway {
    client: Octocrab,
}

impl OctocrabRepositoryGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway for the given API base, optionally authenticated.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::InvalidUrl` when the base URI cannot be parsed or
    /// `GitHubError::Api` when Octocrab fails to construct a client.
    pub fn for_api_base(
        token: Option<&PersonalAccessToken>,
        api_base: &ApiBase,
    ) -> Result<Self, GitHubError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl RepositoryGateway for OctocrabRepositoryGateway {
    async fn list_user_repositories(
        &self,
        locator: &UserLocator,
        request: PageRequest,
    ) -> Result<RepositoryPage, GitHubError> {
        let page_str = request.page().to_string();
        let per_page_str = request.per_page().to_string();
        let query_params = [
            ("per_page", per_page_str.as_str()),
            ("page", page_str.as_str()),
        ];

        let page_result: Page<ApiRepository> = match self
            .client
            .get(locator.repos_path(), Some(&query_params))
            .await
        {
            Ok(page_result) => page_result,
            Err(error) => return Err(self.map_error_with_rate_limit(&error).await),
        };

        let has_next = page_result.next.is_some();
        let items: Vec<Repository> = page_result
            .items
            .into_iter()
            .map(ApiRepository::into)
            .collect();

        Ok(RepositoryPage {
            items,
            request,
            has_next,
        })
    }
}

impl OctocrabRepositoryGateway {
    async fn map_error_with_rate_limit(&self, error: &octocrab::Error) -> GitHubError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message = format!("{OPERATION} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!(
                        "{base_message} (resets at {reset}, in {wait}s)",
                        reset = info.reset_at(),
                        wait = info.seconds_until_reset(SystemTime::now())
                    ),
                    None => base_message,
                };

                GitHubError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(OPERATION, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        Some(RateLimitInfo::new(rate.reset))
    }
}
