//! Log subscriber installation.
//!
//! Filtering follows `OCTOSCROLL_LOG` (an `EnvFilter` directive such as
//! `octoscroll=debug`), defaulting to `info`. The interactive view owns the
//! terminal, so it only logs when a log file is configured.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{OctoscrollConfig, OperationMode};
use crate::github::error::GitHubError;

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "OCTOSCROLL_LOG";

const DEFAULT_FILTER: &str = "info";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// No subscriber is installed.
    Disabled,
    /// Records are written to standard error.
    Stderr,
    /// Records are appended to a file.
    File(PathBuf),
}

impl LogTarget {
    /// Chooses the target for the configured mode.
    #[must_use]
    pub fn for_config(config: &OctoscrollConfig) -> Self {
        match (&config.log_file, config.operation_mode()) {
            (Some(path), _) => Self::File(PathBuf::from(path)),
            (None, OperationMode::Listing) => Self::Stderr,
            (None, OperationMode::SearchTui) => Self::Disabled,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber for `target`.
///
/// # Errors
///
/// Returns [`GitHubError::Io`] when the log file cannot be opened and
/// [`GitHubError::Configuration`] when a subscriber is already installed.
pub fn init(target: &LogTarget) -> Result<(), GitHubError> {
    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| GitHubError::Io {
                    message: format!("failed to open log file '{}': {error}", path.display()),
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|error| GitHubError::Configuration {
        message: format!("failed to install log subscriber: {error}"),
    })
}
