//! Wiremock fixtures for the repository search BDD tests.

use octoscroll::github::PAGE_SIZE;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::domain::Count;

/// Path prefix the mock server serves the API under.
pub(crate) const API_PREFIX: &str = "/api/v3";

const RATE_LIMIT_RESET_AT: u64 = 1_700_000_000;

fn repos_path(user: &str) -> String {
    format!("{API_PREFIX}/users/{user}/repos")
}

fn repository_json(user: &str, id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("repo-{id}"),
        "html_url": format!("https://github.com/{user}/repo-{id}"),
        "owner": { "login": user, "avatar_url": format!("https://avatars.example/{user}") },
        "forks_count": id,
        "stargazers_count": id * 2,
        "language": "Rust"
    })
}

/// Serves `total` repositories for `user`, one page per request.
pub(crate) async fn mount_repositories(server: &MockServer, user: &str, total: Count) {
    let per_page = u64::from(PAGE_SIZE);
    let pages = total.value().div_ceil(per_page) + 1;

    for page in 1..=pages {
        let first = (page - 1) * per_page + 1;
        let last = total.value().min(page * per_page);
        let body: Vec<_> = (first..=last).map(|id| repository_json(user, id)).collect();

        Mock::given(method("GET"))
            .and(path(repos_path(user)))
            .and(query_param("per_page", PAGE_SIZE.to_string()))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(server)
            .await;
    }
}

/// Answers every lookup for `user` with 404.
pub(crate) async fn mount_not_found(server: &MockServer, user: &str) {
    Mock::given(method("GET"))
        .and(path(repos_path(user)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/repos/repos#list-repositories-for-a-user"
        })))
        .mount(server)
        .await;
}

/// Rejects every lookup for `user` with an exhausted rate limit.
pub(crate) async fn mount_rate_limited(server: &MockServer, user: &str) {
    Mock::given(method("GET"))
        .and(path(repos_path(user)))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded for 203.0.113.7.",
            "documentation_url": "https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/rate_limit")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": {
                "core": { "limit": 60, "used": 60, "remaining": 0, "reset": RATE_LIMIT_RESET_AT },
                "search": { "limit": 10, "used": 0, "remaining": 10, "reset": RATE_LIMIT_RESET_AT }
            },
            "rate": { "limit": 60, "used": 60, "remaining": 0, "reset": RATE_LIMIT_RESET_AT }
        })))
        .mount(server)
        .await;
}
