//! Output formatting utilities for CLI operations.

use std::io::Write;

use octoscroll::search::Notification;
use octoscroll::{GitHubError, Repository};

/// What a completed listing produced.
#[derive(Debug, Clone, Copy)]
pub struct ListingSummary<'a> {
    /// Login that was listed.
    pub user: &'a str,
    /// Repositories in fetch order.
    pub repositories: &'a [Repository],
    /// Pages requested.
    pub pages: u32,
    /// Closing notification from the session.
    pub notification: Option<Notification>,
}

/// Writes a listing summary to the given writer.
pub fn write_listing_summary<W: Write>(
    writer: &mut W,
    summary: &ListingSummary<'_>,
) -> Result<(), GitHubError> {
    writeln!(writer, "Repositories for @{}:", summary.user).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    for repository in summary.repositories {
        let language = repository.language.as_deref().unwrap_or("-");
        writeln!(
            writer,
            "  {} [{language}] ★ {} ⑂ {}",
            repository.name, repository.stargazers_count, repository.forks_count
        )
        .map_err(|e| io_error(&e))?;
        writeln!(writer, "    {}", repository.html_url).map_err(|e| io_error(&e))?;
    }

    if !summary.repositories.is_empty() {
        writeln!(writer).map_err(|e| io_error(&e))?;
    }
    writeln!(
        writer,
        "{} repositories from {} page(s).",
        summary.repositories.len(),
        summary.pages
    )
    .map_err(|e| io_error(&e))?;

    if let Some(notification) = summary.notification {
        writeln!(writer, "{notification}").map_err(|e| io_error(&e))?;
    }

    Ok(())
}

fn io_error(error: &std::io::Error) -> GitHubError {
    GitHubError::Io {
        message: error.to_string(),
    }
}
