//! Search phases and fetch tickets.
//!
//! The phase is a tagged union rather than a set of booleans, so "empty",
//! "exhausted", and "loading" cannot overlap.

/// Identifies one fetch.
///
/// `generation` changes whenever the input text changes, so a response that
/// arrives after the user has started typing a new name no longer matches the
/// session and is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    generation: u64,
    page: u32,
}

impl FetchTicket {
    pub(crate) const fn new(generation: u64, page: u32) -> Self {
        Self { generation, page }
    }

    /// Input generation the fetch belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Page the fetch requested.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }
}

/// Settled phase a failed fetch returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// No successful search yet.
    Idle,
    /// Results shown, more pages available.
    Loaded,
}

/// The fetch currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFetch {
    /// Ticket the response must carry to be accepted.
    pub ticket: FetchTicket,
    /// Phase to restore on failure.
    pub fallback: Fallback,
}

/// Where a search session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing searched for the current input.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading(PendingFetch),
    /// Results shown and another page may exist.
    Loaded,
    /// The final page has been loaded.
    Exhausted,
    /// The user has no repositories.
    Empty,
}

impl SearchPhase {
    /// Returns true while a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Returns true once no further pages will be requested.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted | Self::Empty)
    }

    /// Returns true once a fetch for the current input has succeeded.
    #[must_use]
    pub const fn has_searched(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Loading(pending) => matches!(pending.fallback, Fallback::Loaded),
            Self::Loaded | Self::Exhausted | Self::Empty => true,
        }
    }

    /// Short label for status lines and logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading(_) => "loading",
            Self::Loaded => "loaded",
            Self::Exhausted => "exhausted",
            Self::Empty => "empty",
        }
    }
}
