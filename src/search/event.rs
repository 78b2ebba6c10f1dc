//! Inputs to and outputs from the search reducer.

use std::time::{Duration, Instant};

use crate::github::error::GitHubError;
use crate::github::locator::UserName;
use crate::github::models::Repository;
use crate::github::pagination::PageRequest;

use super::phase::FetchTicket;
use super::scroll::ScrollMetrics;

/// Something that happened to the search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The input text changed. Resets the session.
    InputChanged(String),
    /// Enter pressed or the search button activated.
    Submit,
    /// The viewport moved.
    Scrolled {
        /// Geometry after the move.
        metrics: ScrollMetrics,
        /// When the scroll happened, for throttling.
        at: Instant,
    },
    /// Ask for the next page directly, subject to the same gating as a
    /// scroll-triggered fetch.
    LoadMore,
    /// A fetch returned a page.
    FetchSucceeded {
        /// Ticket of the fetch.
        ticket: FetchTicket,
        /// Repositories on the page, in API order.
        repositories: Vec<Repository>,
    },
    /// A fetch failed.
    FetchFailed {
        /// Ticket of the fetch.
        ticket: FetchTicket,
        /// Classified failure, logged but not shown.
        error: GitHubError,
    },
    /// The minimum loading time after a fetch elapsed.
    SpinnerReleased {
        /// Ticket of the fetch the release belongs to.
        ticket: FetchTicket,
    },
}

/// A fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Ticket to hand back with the result.
    pub ticket: FetchTicket,
    /// User whose repositories to list.
    pub user: UserName,
    /// Page to request.
    pub page: PageRequest,
}

/// Work the reducer asks its host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a repository listing request.
    Fetch(FetchRequest),
    /// Send [`SearchEvent::SpinnerReleased`] after `after` has elapsed.
    ReleaseSpinner {
        /// Ticket to hand back.
        ticket: FetchTicket,
        /// Delay before the release.
        after: Duration,
    },
}
