//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.octoscroll.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `OCTOSCROLL_USER`, `OCTOSCROLL_TOKEN`, and
//!    so on, plus `GITHUB_TOKEN` as a token fallback
//! 4. **Command-line arguments** – `--user`/`-u`, `--token`/`-t`, `--list`/`-l`
//!
//! # Configuration File
//!
//! ```toml
//! user = "octocat"
//! token = "ghp_example"
//! api_base = "https://api.github.com"
//! min_loading_ms = 1500
//! scroll_throttle_ms = 500
//! prefetch_distance = 1500
//! to_top_threshold = 4500
//! log_file = "octoscroll.log"
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::GitHubError;
use crate::github::locator::{ApiBase, PersonalAccessToken};
use crate::github::pagination::PAGE_SIZE;
use crate::search::scroll::{
    DEFAULT_PREFETCH_DISTANCE, DEFAULT_SCROLL_THROTTLE, DEFAULT_TO_TOP_THRESHOLD, ScrollPolicy,
};
use crate::search::session::{DEFAULT_MIN_LOADING_TIME, SearchSettings};

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal search view.
    SearchTui,
    /// Walk every page for one user and print a summary.
    Listing,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `OCTOSCROLL_USER` or `--user`: Username to search for on start-up
/// - `OCTOSCROLL_TOKEN`, `GITHUB_TOKEN`, or `--token`: Optional token
/// - `OCTOSCROLL_API_BASE` or `--api-base`: REST API base URL
/// - `OCTOSCROLL_LOG_FILE` or `--log-file`: Where to write logs
///
/// # Example
///
/// ```no_run
/// use octoscroll::OctoscrollConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = OctoscrollConfig::load().expect("failed to load configuration");
/// let settings = config.search_settings();
/// assert_eq!(settings.per_page, 20);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "OCTOSCROLL",
    discovery(
        dotfile_name = ".octoscroll.toml",
        config_file_name = "octoscroll.toml",
        app_name = "octoscroll"
    )
)]
pub struct OctoscrollConfig {
    /// GitHub username to search for when the program starts.
    ///
    /// Required in listing mode.
    ///
    /// Can be provided via:
    /// - CLI: `--user <LOGIN>` or `-u <LOGIN>`
    /// - Environment: `OCTOSCROLL_USER`
    /// - Config file: `user = "..."`
    #[ortho_config(cli_short = 'u')]
    pub user: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Optional. Anonymous requests are limited to 60 per hour.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `OCTOSCROLL_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// REST API base URL, for GitHub Enterprise or test servers.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Lists every repository for `user` and exits instead of opening the
    /// interactive view.
    ///
    /// Can be provided via:
    /// - CLI: `--list` / `-l`
    /// - Config file: `list = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so `OCTOSCROLL_LIST` is not supported.
    #[ortho_config(cli_short = 'l')]
    pub list: bool,

    /// Minimum time the loading indicator stays visible after a fetch, in
    /// milliseconds.
    #[ortho_config()]
    pub min_loading_ms: u64,

    /// Minimum gap between bottom-of-list checks while scrolling, in
    /// milliseconds.
    #[ortho_config()]
    pub scroll_throttle_ms: u64,

    /// Distance from the end of the list, in layout units, at which the next
    /// page is requested.
    #[ortho_config()]
    pub prefetch_distance: u32,

    /// Scroll offset, in layout units, past which the scroll-to-top hint is
    /// shown.
    #[ortho_config()]
    pub to_top_threshold: u32,

    /// File to append logs to. Without it the interactive view does not log.
    #[ortho_config()]
    pub log_file: Option<String>,
}

impl Default for OctoscrollConfig {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            api_base: None,
            list: false,
            min_loading_ms: duration_millis(DEFAULT_MIN_LOADING_TIME),
            scroll_throttle_ms: duration_millis(DEFAULT_SCROLL_THROTTLE),
            prefetch_distance: DEFAULT_PREFETCH_DISTANCE,
            to_top_threshold: DEFAULT_TO_TOP_THRESHOLD,
            log_file: None,
        }
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl OctoscrollConfig {
    /// Resolves the optional token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// A blank `GITHUB_TOKEN` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidToken`] when a token is configured but
    /// blank.
    pub fn resolve_token(&self) -> Result<Option<PersonalAccessToken>, GitHubError> {
        if let Some(token) = &self.token {
            return PersonalAccessToken::new(token).map(Some);
        }

        Ok(env::var("GITHUB_TOKEN")
            .ok()
            .and_then(|value| PersonalAccessToken::new(value).ok()))
    }

    /// Returns the configured API base, or the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidUrl`] when `api_base` is not an http(s)
    /// URL.
    pub fn api_base(&self) -> Result<ApiBase, GitHubError> {
        self.api_base
            .as_deref()
            .map_or_else(|| Ok(ApiBase::default()), ApiBase::parse)
    }

    /// Returns the username or an error if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Configuration`] when no username is configured.
    pub fn require_user(&self) -> Result<&str, GitHubError> {
        self.user
            .as_deref()
            .filter(|user| !user.trim().is_empty())
            .ok_or_else(|| GitHubError::Configuration {
                message: "a username is required for --list (use --user or -u)".to_owned(),
            })
    }

    /// Determines the operation mode.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.list {
            OperationMode::Listing
        } else {
            OperationMode::SearchTui
        }
    }

    /// Builds the session settings from the configured tunables.
    #[must_use]
    pub const fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            per_page: PAGE_SIZE,
            min_loading_time: Duration::from_millis(self.min_loading_ms),
            scroll: ScrollPolicy {
                prefetch_distance: self.prefetch_distance,
                to_top_threshold: self.to_top_threshold,
                throttle: Duration::from_millis(self.scroll_throttle_ms),
            },
        }
    }

    /// Validates cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Configuration`] when listing mode has no user,
    /// or [`GitHubError::InvalidUrl`] when the API base is malformed.
    pub fn validate(&self) -> Result<(), GitHubError> {
        if self.operation_mode() == OperationMode::Listing {
            self.require_user()?;
        }
        self.api_base().map(|_| ())
    }
}
