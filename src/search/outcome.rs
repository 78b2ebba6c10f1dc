//! Classification of a successful page fetch.

use crate::github::pagination::PageRequest;

/// What a successful fetch means for the session.
///
/// Cases are checked in declaration order and every combination of inputs
/// maps to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The user has no repositories at all.
    Empty,
    /// The page was short, so it is the last one.
    Final {
        /// Whether the page replaces the current results (page 1) rather
        /// than extending them.
        replace: bool,
    },
    /// A full first page arrived while results were already shown.
    Refreshed,
    /// A full page extends the results.
    Appended,
}

impl PageOutcome {
    /// Classifies a page of `received` repositories fetched for `request`.
    ///
    /// `has_repositories` reports whether the session already holds results.
    /// An empty page only means the user has nothing when no results are
    /// shown; otherwise it ends the listing and keeps what is already there.
    ///
    /// # Example
    ///
    /// ```
    /// use octoscroll::github::PageRequest;
    /// use octoscroll::search::PageOutcome;
    ///
    /// let third = PageRequest::new(3, 20).expect("valid request");
    /// assert_eq!(
    ///     PageOutcome::classify(true, third, 7),
    ///     PageOutcome::Final { replace: false }
    /// );
    /// ```
    #[must_use]
    pub fn classify(has_repositories: bool, request: PageRequest, received: usize) -> Self {
        let first_page = request.is_first_page();

        if received == 0 {
            return if has_repositories {
                Self::Final { replace: false }
            } else {
                Self::Empty
            };
        }

        if received < usize::from(request.per_page()) {
            return Self::Final {
                replace: first_page,
            };
        }

        if first_page && has_repositories {
            return Self::Refreshed;
        }

        Self::Appended
    }

    /// Returns true when the page replaces the current results.
    #[must_use]
    pub const fn replaces_results(self) -> bool {
        matches!(
            self,
            Self::Empty | Self::Final { replace: true } | Self::Refreshed
        )
    }

    /// Returns true when no further page will be requested.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Empty | Self::Final { .. })
    }
}
