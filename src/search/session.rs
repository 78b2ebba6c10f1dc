//! The search session state machine.
//!
//! [`SearchSession`] owns everything the search view shows and changes only
//! through [`SearchSession::apply`]. It performs no I/O: fetches and timers
//! come back as [`Effect`] values for the host to carry out, and their
//! results arrive as further events.

use std::collections::HashSet;
use std::time::Duration;

use crate::github::error::GitHubError;
use crate::github::locator::UserName;
use crate::github::models::Repository;
use crate::github::pagination::{PAGE_SIZE, PageRequest};

use super::event::{Effect, FetchRequest, SearchEvent};
use super::feedback::{Notification, SearchError};
use super::outcome::PageOutcome;
use super::phase::{Fallback, FetchTicket, PendingFetch, SearchPhase};
use super::scroll::{ScrollMetrics, ScrollPolicy, ScrollThrottle};

/// Default minimum time the loading indicator stays up after a fetch.
pub const DEFAULT_MIN_LOADING_TIME: Duration = Duration::from_millis(1500);

/// Tunables for a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Repositories requested per page.
    pub per_page: u8,
    /// How long the loading indicator lingers after a fetch resolves.
    pub min_loading_time: Duration,
    /// Scroll thresholds and throttle.
    pub scroll: ScrollPolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            per_page: PAGE_SIZE,
            min_loading_time: DEFAULT_MIN_LOADING_TIME,
            scroll: ScrollPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spinner {
    Hidden,
    Fetching,
    Lingering(FetchTicket),
}

/// State of the repository search view.
#[derive(Debug, Clone)]
pub struct SearchSession {
    settings: SearchSettings,
    user_name: String,
    repositories: Vec<Repository>,
    seen_ids: HashSet<u64>,
    next_page: u32,
    phase: SearchPhase,
    spinner: Spinner,
    error: Option<SearchError>,
    notification: Option<Notification>,
    show_to_top: bool,
    throttle: ScrollThrottle,
    generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

impl SearchSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            user_name: String::new(),
            repositories: Vec::new(),
            seen_ids: HashSet::new(),
            next_page: 1,
            phase: SearchPhase::Idle,
            spinner: Spinner::Hidden,
            error: None,
            notification: None,
            show_to_top: false,
            throttle: ScrollThrottle::new(settings.scroll.throttle),
            generation: 0,
        }
    }

    /// Feeds one event through the state machine.
    ///
    /// Returns the effect the host must perform, if any. Fetch effects must
    /// eventually be answered with [`SearchEvent::FetchSucceeded`] or
    /// [`SearchEvent::FetchFailed`] carrying the same ticket, and spinner
    /// releases with [`SearchEvent::SpinnerReleased`].
    pub fn apply(&mut self, event: SearchEvent) -> Option<Effect> {
        match event {
            SearchEvent::InputChanged(text) => {
                self.reset(text);
                None
            }
            SearchEvent::Submit => self.submit(),
            SearchEvent::Scrolled { metrics, at } => {
                self.show_to_top = self.settings.scroll.shows_to_top(&metrics);
                if self.throttle.admit(at) {
                    self.check_bottom(&metrics)
                } else {
                    None
                }
            }
            SearchEvent::LoadMore => self.load_more(),
            SearchEvent::FetchSucceeded {
                ticket,
                repositories,
            } => self.fetch_succeeded(ticket, repositories),
            SearchEvent::FetchFailed { ticket, error } => self.fetch_failed(ticket, &error),
            SearchEvent::SpinnerReleased { ticket } => {
                if self.spinner == Spinner::Lingering(ticket) {
                    self.spinner = Spinner::Hidden;
                }
                None
            }
        }
    }

    fn reset(&mut self, text: String) {
        self.user_name = text;
        self.repositories.clear();
        self.seen_ids.clear();
        self.next_page = 1;
        self.phase = SearchPhase::Idle;
        self.spinner = Spinner::Hidden;
        self.error = None;
        self.notification = None;
        self.show_to_top = false;
        self.throttle.reset();
        self.generation = self.generation.wrapping_add(1);
    }

    fn submit(&mut self) -> Option<Effect> {
        if self.phase.is_loading() {
            return None;
        }

        let user = match UserName::parse(&self.user_name) {
            Ok(user) => user,
            Err(GitHubError::EmptyUserName) => {
                self.error = Some(SearchError::EmptyUserName);
                return None;
            }
            Err(error) => {
                tracing::warn!("rejected username before lookup: {error}");
                self.error = Some(SearchError::LookupFailed);
                return None;
            }
        };

        let fallback = match self.phase {
            SearchPhase::Idle => Fallback::Idle,
            SearchPhase::Loaded => Fallback::Loaded,
            SearchPhase::Loading(_) | SearchPhase::Exhausted | SearchPhase::Empty => return None,
        };

        self.start_fetch(user, 1, fallback)
    }

    fn check_bottom(&mut self, metrics: &ScrollMetrics) -> Option<Effect> {
        if self.settings.scroll.is_near_bottom(metrics) {
            self.load_more()
        } else {
            None
        }
    }

    fn load_more(&mut self) -> Option<Effect> {
        if self.phase != SearchPhase::Loaded
            || self.repositories.len() < usize::from(self.settings.per_page)
        {
            return None;
        }

        let user = UserName::parse(&self.user_name).ok()?;
        self.start_fetch(user, self.next_page, Fallback::Loaded)
    }

    fn start_fetch(&mut self, user: UserName, page: u32, fallback: Fallback) -> Option<Effect> {
        let request = match PageRequest::new(page, self.settings.per_page) {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!("refusing to fetch page {page} for {user}: {error}");
                return None;
            }
        };

        let ticket = FetchTicket::new(self.generation, page);
        self.phase = SearchPhase::Loading(PendingFetch { ticket, fallback });
        self.spinner = Spinner::Fetching;
        tracing::debug!("requesting page {page} of repositories for {user}");

        Some(Effect::Fetch(FetchRequest {
            ticket,
            user,
            page: request,
        }))
    }

    fn take_pending(&self, ticket: FetchTicket) -> Option<PendingFetch> {
        match self.phase {
            SearchPhase::Loading(pending) if pending.ticket == ticket => Some(pending),
            _ => {
                tracing::debug!(
                    "discarding stale response for page {} (generation {}, current {})",
                    ticket.page(),
                    ticket.generation(),
                    self.generation
                );
                None
            }
        }
    }

    fn fetch_succeeded(
        &mut self,
        ticket: FetchTicket,
        repositories: Vec<Repository>,
    ) -> Option<Effect> {
        self.take_pending(ticket)?;
        let request = PageRequest::new(ticket.page(), self.settings.per_page).ok()?;

        let outcome =
            PageOutcome::classify(!self.repositories.is_empty(), request, repositories.len());
        tracing::debug!(
            "page {} returned {} repositories: {outcome:?}",
            ticket.page(),
            repositories.len()
        );

        if outcome.replaces_results() {
            self.repositories.clear();
            self.seen_ids.clear();
        }
        self.extend_unique(repositories);
        self.error = None;

        match outcome {
            PageOutcome::Empty => {
                self.phase = SearchPhase::Empty;
                self.notification = Some(Notification::NoRepositories);
            }
            PageOutcome::Final { .. } => {
                self.phase = SearchPhase::Exhausted;
                self.notification = Some(Notification::NoMoreRepositories);
            }
            PageOutcome::Refreshed | PageOutcome::Appended => {
                self.phase = SearchPhase::Loaded;
                self.notification = None;
                self.next_page = ticket.page().saturating_add(1);
            }
        }

        Some(self.linger(ticket))
    }

    fn fetch_failed(&mut self, ticket: FetchTicket, error: &GitHubError) -> Option<Effect> {
        let pending = self.take_pending(ticket)?;
        tracing::warn!("repository lookup for page {} failed: {error}", ticket.page());

        self.error = Some(SearchError::LookupFailed);
        self.phase = match pending.fallback {
            Fallback::Idle => SearchPhase::Idle,
            Fallback::Loaded => SearchPhase::Loaded,
        };

        Some(self.linger(ticket))
    }

    fn extend_unique(&mut self, repositories: Vec<Repository>) {
        for repository in repositories {
            if self.seen_ids.insert(repository.id) {
                self.repositories.push(repository);
            }
        }
    }

    const fn linger(&mut self, ticket: FetchTicket) -> Effect {
        self.spinner = Spinner::Lingering(ticket);
        Effect::ReleaseSpinner {
            ticket,
            after: self.settings.min_loading_time,
        }
    }

    /// Current input text.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Accumulated repositories in fetch order, unique by id.
    #[must_use]
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Next page a scroll-triggered fetch would request.
    #[must_use]
    pub const fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Returns true once the final page has been seen.
    #[must_use]
    pub const fn repo_limit(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns true once a fetch for the current input has succeeded.
    #[must_use]
    pub const fn searched(&self) -> bool {
        self.phase.has_searched()
    }

    /// Returns true while a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Whether the loading indicator is shown.
    #[must_use]
    pub const fn spinner_visible(&self) -> bool {
        !matches!(self.spinner, Spinner::Hidden)
    }

    /// Error shown beneath the input.
    #[must_use]
    pub const fn error(&self) -> Option<SearchError> {
        self.error
    }

    /// Notification shown below the results.
    #[must_use]
    pub const fn notification(&self) -> Option<Notification> {
        self.notification
    }

    /// Whether the scroll-to-top control is shown.
    #[must_use]
    pub const fn show_to_top(&self) -> bool {
        self.show_to_top
    }

    /// Input generation; changes on every input edit.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Settings the session was created with.
    #[must_use]
    pub const fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
