//! Non-interactive listing mode.
//!
//! Drives the same [`SearchSession`] the TUI uses: submit the username, then
//! keep asking for the next page until the session reports the end of the
//! listing.

use std::io::{self, Write};
use std::sync::Arc;

use octoscroll::search::Effect;
use octoscroll::{
    ApiBase, GitHubError, OctocrabRepositoryGateway, OctoscrollConfig, PersonalAccessToken,
    RepositoryGateway, SearchDriver, SearchEvent, SearchSession, UserName,
};

use super::output::{ListingSummary, write_listing_summary};

/// Lists every repository for the configured user.
///
/// # Errors
///
/// Returns [`GitHubError::Configuration`] if no user is configured, or the
/// classified gateway error if a page cannot be fetched.
pub async fn run(config: &OctoscrollConfig) -> Result<(), GitHubError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabRepositoryGateway::for_api_base, &mut stdout).await
}

/// Lists repositories using a custom gateway builder.
///
/// This function is exposed for testing with mock gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &OctoscrollConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), GitHubError>
where
    G: RepositoryGateway + 'static,
    F: FnOnce(Option<&PersonalAccessToken>, &ApiBase) -> Result<G, GitHubError>,
    W: Write,
{
    let user = UserName::parse(config.require_user()?)?;
    let token = config.resolve_token()?;
    let api_base = config.api_base()?;

    let gateway = build_gateway(token.as_ref(), &api_base)?;
    let driver = SearchDriver::new(Arc::new(gateway), api_base);

    let mut session = SearchSession::new(config.search_settings());
    session.apply(SearchEvent::InputChanged(user.as_str().to_owned()));

    let mut pages = 0_u32;
    let mut effect = session.apply(SearchEvent::Submit);
    while let Some(next) = effect {
        effect = match next {
            Effect::Fetch(request) => {
                pages = pages.saturating_add(1);
                match driver.execute(request).await {
                    SearchEvent::FetchFailed { error, .. } => return Err(error),
                    event => session.apply(event),
                }
            }
            // No spinner to hold up here; release it and move on.
            Effect::ReleaseSpinner { ticket, .. } => {
                session.apply(SearchEvent::SpinnerReleased { ticket });
                session.apply(SearchEvent::LoadMore)
            }
        };
    }

    tracing::info!(
        "listed {} repositories for {user} over {pages} page(s)",
        session.repositories().len()
    );

    write_listing_summary(
        writer,
        &ListingSummary {
            user: user.as_str(),
            repositories: session.repositories(),
            pages,
            notification: session.notification(),
        },
    )
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use octoscroll::github::models::test_support::repositories;
    use octoscroll::github::{PageRequest, RepositoryPage};
    use octoscroll::{
        ApiBase, GitHubError, OctoscrollConfig, PersonalAccessToken, Repository,
        RepositoryGateway, UserLocator,
    };
    use rstest::{fixture, rstest};

    use super::run_with_gateway_builder;

    #[derive(Clone, Default)]
    struct CapturingGateway {
        requests: Arc<Mutex<Vec<(String, u32)>>>,
        responses: Arc<Mutex<VecDeque<Result<Vec<Repository>, GitHubError>>>>,
    }

    impl CapturingGateway {
        fn with_responses(responses: Vec<Result<Vec<Repository>, GitHubError>>) -> Self {
            Self {
                requests: Arc::default(),
                responses: Arc::new(Mutex::new(responses.into())),
            }
        }

        fn requested_pages(&self) -> Vec<u32> {
            self.requests
                .lock()
                .expect("requests mutex should be available")
                .iter()
                .map(|(_, page)| *page)
                .collect()
        }
    }

    #[async_trait]
    impl RepositoryGateway for CapturingGateway {
        async fn list_user_repositories(
            &self,
            locator: &UserLocator,
            request: PageRequest,
        ) -> Result<RepositoryPage, GitHubError> {
            self.requests
                .lock()
                .expect("requests mutex should be available")
                .push((locator.repos_path(), request.page()));

            let items = self
                .responses
                .lock()
                .expect("responses mutex should be available")
                .pop_front()
                .expect("no more responses queued")?;
            let has_next = items.len() == usize::from(request.per_page());
            Ok(RepositoryPage {
                items,
                request,
                has_next,
            })
        }
    }

    #[fixture]
    fn config() -> OctoscrollConfig {
        OctoscrollConfig {
            user: Some("octocat".to_owned()),
            token: Some("ghp_test".to_owned()),
            list: true,
            ..OctoscrollConfig::default()
        }
    }

    async fn run_listing(
        config: &OctoscrollConfig,
        gateway: &CapturingGateway,
    ) -> (Result<(), GitHubError>, String) {
        let mut buffer = Vec::new();
        let builder_gateway = gateway.clone();
        let result = run_with_gateway_builder(
            config,
            move |token: Option<&PersonalAccessToken>, api_base: &ApiBase| {
                assert_eq!(token.map(PersonalAccessToken::value), Some("ghp_test"));
                assert_eq!(api_base, &ApiBase::default());
                Ok(builder_gateway)
            },
            &mut buffer,
        )
        .await;
        let output = String::from_utf8(buffer).expect("output should be UTF-8");
        (result, output)
    }

    #[rstest]
    #[tokio::test]
    async fn walks_pages_until_a_short_page(config: OctoscrollConfig) {
        let gateway = CapturingGateway::with_responses(vec![
            Ok(repositories(1, 20)),
            Ok(repositories(21, 20)),
            Ok(repositories(41, 5)),
        ]);

        let (result, output) = run_listing(&config, &gateway).await;

        assert!(result.is_ok());
        assert_eq!(gateway.requested_pages(), vec![1, 2, 3]);
        assert!(output.contains("45 repositories from 3 page(s)."));
        assert!(output.contains("This user doesn't have any more repositories."));
    }

    #[rstest]
    #[tokio::test]
    async fn empty_later_page_ends_listing(config: OctoscrollConfig) {
        let gateway = CapturingGateway::with_responses(vec![
            Ok(repositories(1, 20)),
            Ok(Vec::new()),
        ]);

        let (result, output) = run_listing(&config, &gateway).await;

        assert!(result.is_ok());
        assert_eq!(gateway.requested_pages(), vec![1, 2]);
        assert!(output.contains("20 repositories from 2 page(s)."));
        assert!(output.contains("This user doesn't have any more repositories."));
    }

    #[rstest]
    #[tokio::test]
    async fn user_without_repositories(config: OctoscrollConfig) {
        let gateway = CapturingGateway::with_responses(vec![Ok(Vec::new())]);

        let (result, output) = run_listing(&config, &gateway).await;

        assert!(result.is_ok());
        assert!(output.contains("This user doesn't have any repositories."));
    }

    #[rstest]
    #[tokio::test]
    async fn gateway_error_is_returned(config: OctoscrollConfig) {
        let gateway = CapturingGateway::with_responses(vec![Err(GitHubError::NotFound {
            message: "Not Found".to_owned(),
        })]);

        let (result, output) = run_listing(&config, &gateway).await;

        assert_eq!(
            result,
            Err(GitHubError::NotFound {
                message: "Not Found".to_owned(),
            })
        );
        assert!(output.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_user_is_rejected_before_any_request(config: OctoscrollConfig) {
        let bad_config = OctoscrollConfig {
            user: Some("not a login".to_owned()),
            ..config
        };
        let gateway = CapturingGateway::default();

        let (result, _) = run_listing(&bad_config, &gateway).await;

        assert!(matches!(result, Err(GitHubError::InvalidUserName(_))));
        assert!(gateway.requested_pages().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn missing_user_is_a_configuration_error(config: OctoscrollConfig) {
        let no_user = OctoscrollConfig {
            user: None,
            ..config
        };
        let gateway = CapturingGateway::default();

        let (result, _) = run_listing(&no_user, &gateway).await;

        assert!(matches!(result, Err(GitHubError::Configuration { .. })));
    }
}
