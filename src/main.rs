//! Octoscroll CLI entrypoint.
//!
//! Runs the interactive search view by default, or walks every page for one
//! user and prints a summary when `--list` is given.

use std::io::{self, Write};
use std::process::ExitCode;

use octoscroll::logging::{self, LogTarget};
use octoscroll::{GitHubError, OctoscrollConfig, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), GitHubError> {
    let config = load_config()?;
    config.validate()?;
    logging::init(&LogTarget::for_config(&config))?;

    match config.operation_mode() {
        OperationMode::SearchTui => cli::search_tui::run(&config).await,
        OperationMode::Listing => cli::listing::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`GitHubError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<OctoscrollConfig, GitHubError> {
    OctoscrollConfig::load().map_err(|error| GitHubError::Configuration {
        message: error.to_string(),
    })
}
