//! User-facing error and notification messages.
//!
//! Detailed [`GitHubError`](crate::github::GitHubError) values are logged;
//! only these messages reach the screen.

use std::fmt;

/// Error shown beneath the search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Submitted with a blank input.
    EmptyUserName,
    /// The lookup failed: unknown user, rate limit, or transport failure.
    /// GitHub does not let these be told apart reliably for anonymous calls.
    LookupFailed,
}

impl SearchError {
    /// Text displayed to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyUserName => "Please enter a username.",
            Self::LookupFailed => {
                "Can't find this username on GitHub or the limit of API requests has been exceeded."
            }
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Informational message shown below the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The user has no public repositories at all.
    NoRepositories,
    /// The final page has been loaded.
    NoMoreRepositories,
}

impl Notification {
    /// Text displayed to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoRepositories => "This user doesn't have any repositories.",
            Self::NoMoreRepositories => "This user doesn't have any more repositories.",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
