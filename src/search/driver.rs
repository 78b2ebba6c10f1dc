//! Executes fetch effects against a repository gateway.

use std::sync::Arc;
use std::time::Instant;

use crate::github::gateway::RepositoryGateway;
use crate::github::locator::{ApiBase, UserLocator};

use super::event::{FetchRequest, SearchEvent};

/// Turns [`FetchRequest`]s into the events that answer them.
///
/// The driver never fails: a gateway error becomes
/// [`SearchEvent::FetchFailed`] so the session can decide what to show.
#[derive(Clone)]
pub struct SearchDriver {
    gateway: Arc<dyn RepositoryGateway>,
    api_base: ApiBase,
}

impl std::fmt::Debug for SearchDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchDriver")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl SearchDriver {
    /// Creates a driver that lists repositories through `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn RepositoryGateway>, api_base: ApiBase) -> Self {
        Self { gateway, api_base }
    }

    /// API base the driver targets.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Performs one fetch and reports its result.
    pub async fn execute(&self, request: FetchRequest) -> SearchEvent {
        let FetchRequest { ticket, user, page } = request;
        let locator = UserLocator::new(self.api_base.clone(), user);
        let started = Instant::now();

        match self.gateway.list_user_repositories(&locator, page).await {
            Ok(result) => {
                tracing::info!(
                    "fetched page {} for {}: {} repositories in {} ms (next link: {})",
                    page.page(),
                    locator.user(),
                    result.items.len(),
                    started.elapsed().as_millis(),
                    result.has_next
                );
                SearchEvent::FetchSucceeded {
                    ticket,
                    repositories: result.items,
                }
            }
            Err(error) => {
                tracing::warn!(
                    "fetching page {} for {} failed: {error}",
                    page.page(),
                    locator.user()
                );
                SearchEvent::FetchFailed { ticket, error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::SearchDriver;
    use crate::github::models::test_support::repositories;
    use crate::github::{
        ApiBase, GitHubError, MockRepositoryGateway, PAGE_SIZE, PageRequest, RepositoryPage,
    };
    use crate::search::{Effect, SearchEvent, SearchSession};

    fn first_fetch(user: &str) -> crate::search::FetchRequest {
        let mut session = SearchSession::default();
        session.apply(SearchEvent::InputChanged(user.to_owned()));
        match session.apply(SearchEvent::Submit) {
            Some(Effect::Fetch(request)) => request,
            other => panic!("expected a fetch effect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn successful_fetch_becomes_success_event() {
        let mut gateway = MockRepositoryGateway::new();
        gateway
            .expect_list_user_repositories()
            .withf(|locator, request| {
                locator.repos_path() == "/users/octocat/repos" && request.page() == 1
            })
            .times(1)
            .returning(|_, request| {
                Ok(RepositoryPage {
                    items: repositories(1, u64::from(PAGE_SIZE)),
                    request,
                    has_next: true,
                })
            });

        let driver = SearchDriver::new(Arc::new(gateway), ApiBase::default());
        let request = first_fetch("octocat");
        let ticket = request.ticket;

        match driver.execute(request).await {
            SearchEvent::FetchSucceeded {
                ticket: returned,
                repositories,
            } => {
                assert_eq!(returned, ticket);
                assert_eq!(repositories.len(), 20);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn gateway_error_becomes_failure_event() {
        let mut gateway = MockRepositoryGateway::new();
        gateway
            .expect_list_user_repositories()
            .times(1)
            .returning(|_, _| {
                Err(GitHubError::NotFound {
                    message: "Not Found".to_owned(),
                })
            });

        let driver = SearchDriver::new(Arc::new(gateway), ApiBase::default());
        let request = first_fetch("ghost-user-404");
        let ticket = request.ticket;

        assert_eq!(
            driver.execute(request).await,
            SearchEvent::FetchFailed {
                ticket,
                error: GitHubError::NotFound {
                    message: "Not Found".to_owned(),
                },
            }
        );
    }

    #[test]
    fn page_request_is_forwarded_unchanged() {
        let request = first_fetch("octocat");
        assert_eq!(
            request.page,
            PageRequest::new(1, PAGE_SIZE).expect("valid request")
        );
    }
}
