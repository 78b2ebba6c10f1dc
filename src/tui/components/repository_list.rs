//! Repository card list.
//!
//! The list is laid out as a flat document of text rows: a profile heading,
//! one card per repository, and a trailing notification. The app scrolls a
//! window over that document.

use unicode_width::UnicodeWidthChar;

use crate::github::models::Repository;
use crate::search::Notification;

/// Rows taken by one repository card, including the spacer.
pub const CARD_HEIGHT: usize = 4;

/// Context for rendering the repository list.
#[derive(Debug, Clone)]
pub struct RepositoryListViewContext<'a> {
    /// Login the results belong to.
    pub user_name: &'a str,
    /// Repositories in fetch order.
    pub repositories: &'a [Repository],
    /// Message shown after the last card.
    pub notification: Option<Notification>,
    /// First document row in view.
    pub scroll_offset: usize,
    /// Rows available for the list.
    pub visible_height: usize,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Renders repository cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryListComponent;

impl RepositoryListComponent {
    /// Builds every row of the document.
    #[must_use]
    pub fn document(ctx: &RepositoryListViewContext<'_>) -> Vec<String> {
        let mut rows = Vec::new();

        // Profile heading appears only alongside results.
        if let Some(first) = ctx.repositories.first() {
            rows.push(format!("@{}", ctx.user_name));
            if let Some(avatar) = &first.owner_avatar_url {
                rows.push(format!("  avatar: {avatar}"));
            }
            rows.push(String::new());
        }

        for repository in ctx.repositories {
            rows.extend(card_rows(repository));
        }

        if let Some(notification) = ctx.notification {
            rows.push(format!("  {notification}"));
        }

        rows
    }

    /// Number of rows the document occupies.
    #[must_use]
    pub fn document_height(ctx: &RepositoryListViewContext<'_>) -> usize {
        let heading = ctx
            .repositories
            .first()
            .map_or(0, |first| 2 + usize::from(first.owner_avatar_url.is_some()));
        heading
            .saturating_add(ctx.repositories.len().saturating_mul(CARD_HEIGHT))
            .saturating_add(usize::from(ctx.notification.is_some()))
    }

    /// Renders the visible window of the document.
    #[must_use]
    pub fn view(ctx: &RepositoryListViewContext<'_>) -> String {
        let mut output = String::new();
        for row in Self::document(ctx)
            .iter()
            .skip(ctx.scroll_offset)
            .take(ctx.visible_height)
        {
            output.push_str(&truncate_to_width(row, ctx.max_width));
            output.push('\n');
        }
        output
    }
}

fn card_rows(repository: &Repository) -> [String; CARD_HEIGHT] {
    let language = repository
        .language
        .as_deref()
        .map_or_else(String::new, |language| format!("  {language}"));

    [
        format!("  {}", repository.name),
        format!(
            "    ★ {}  ⑂ {}{language}",
            repository.stargazers_count, repository.forks_count
        ),
        format!("    {}", repository.html_url),
        String::new(),
    ]
}

fn truncate_to_width(line: &str, max_width: usize) -> String {
    let mut output = String::new();
    let mut used = 0_usize;

    for ch in line.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(width) > max_width {
            break;
        }
        output.push(ch);
        used = used.saturating_add(width);
    }

    output
}
