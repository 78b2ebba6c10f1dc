//! Interactive search mode.
//!
//! Builds the gateway, stores it for `SearchApp::init()`, and runs the
//! bubbletea-rs program on the alternate screen.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use octoscroll::tui::{SearchApp, SearchContext, set_search_context};
use octoscroll::{GitHubError, OctocrabRepositoryGateway, OctoscrollConfig, SearchDriver};

/// Runs the interactive search view.
///
/// # Errors
///
/// Returns an error if the token or API base is invalid, the HTTP client
/// cannot be built, or the TUI fails to start.
pub async fn run(config: &OctoscrollConfig) -> Result<(), GitHubError> {
    let token = config.resolve_token()?;
    let api_base = config.api_base()?;
    let gateway = OctocrabRepositoryGateway::for_api_base(token.as_ref(), &api_base)?;

    let context = SearchContext {
        driver: SearchDriver::new(Arc::new(gateway), api_base),
        settings: config.search_settings(),
        initial_user: config
            .user
            .as_deref()
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .map(str::to_owned),
    };

    // A context from an earlier run in the same process is kept.
    if !set_search_context(context) {
        tracing::debug!("search context already set; reusing it");
    }

    run_tui().await.map_err(|error| GitHubError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `SearchApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // SearchApp::init() retrieves the context from module-level storage.
    let program = Program::<SearchApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
