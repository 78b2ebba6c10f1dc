//! Scenario state for the repository search BDD tests.
//!
//! The session is driven synchronously: fetch effects run against the mock
//! server on a shared runtime, and spinner releases are parked until a step
//! asks for them.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use octoscroll::search::{Effect, FetchTicket, ScrollMetrics};
use octoscroll::tui::UNITS_PER_ROW;
use octoscroll::{ApiBase, OctocrabRepositoryGateway, SearchDriver, SearchEvent, SearchSession};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::MockServer;

use super::harness::API_PREFIX;

/// Rows one repository card takes in the terminal view.
const CARD_ROWS: u32 = 4;
/// Rows of the terminal list viewport.
const VIEWPORT_ROWS: u32 = 20;

/// Shared runtime wrapper that can be stored in rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct SearchState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) session: Slot<SearchSession>,
    pub(crate) release: Slot<FetchTicket>,
    pub(crate) clock: Slot<Instant>,
}

/// Ensures the runtime and server are initialised in `SearchState`.
pub(crate) fn ensure_runtime_and_server(search_state: &SearchState) -> SharedRuntime {
    if search_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        search_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = search_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if search_state.server.with_ref(|_| ()).is_none() {
        search_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

fn build_driver(search_state: &SearchState, runtime: &SharedRuntime) -> SearchDriver {
    let server_url = search_state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"));
    let api_base = ApiBase::parse(&format!("{server_url}{API_PREFIX}"))
        .unwrap_or_else(|error| panic!("mock API base should parse: {error}"));

    // Octocrab spawns its service on the ambient runtime.
    let gateway = runtime
        .block_on(async { OctocrabRepositoryGateway::for_api_base(None, &api_base) })
        .unwrap_or_else(|error| panic!("failed to build gateway: {error}"));
    SearchDriver::new(Arc::new(gateway), api_base)
}

/// Applies `event` and carries out the resulting effects until the session
/// settles.
pub(crate) fn drive(search_state: &SearchState, event: SearchEvent) {
    let runtime = ensure_runtime_and_server(search_state);
    let driver = build_driver(search_state, &runtime);
    let mut session = search_state.session.take().unwrap_or_default();

    let mut effect = session.apply(event);
    while let Some(next) = effect {
        effect = match next {
            Effect::Fetch(request) => session.apply(runtime.block_on(driver.execute(request))),
            Effect::ReleaseSpinner { ticket, .. } => {
                search_state.release.set(ticket);
                None
            }
        };
    }

    search_state.session.set(session);
}

/// Delivers a parked spinner release, if any.
pub(crate) fn release_spinner(search_state: &SearchState) {
    if let Some(ticket) = search_state.release.take() {
        drive(search_state, SearchEvent::SpinnerReleased { ticket });
    }
}

/// Returns a scroll timestamp past the throttle window of the previous one.
pub(crate) fn next_scroll_time(search_state: &SearchState) -> Instant {
    let at = search_state
        .clock
        .get()
        .map_or_else(Instant::now, |previous| previous + Duration::from_secs(1));
    search_state.clock.set(at);
    at
}

/// Viewport metrics with the last card in view.
pub(crate) fn bottom_metrics(search_state: &SearchState) -> ScrollMetrics {
    let cards = search_state
        .session
        .with_ref(|session| session.repositories().len())
        .unwrap_or_default();
    let rows = u32::try_from(cards)
        .unwrap_or(u32::MAX)
        .saturating_mul(CARD_ROWS);
    let document_height = rows.saturating_mul(UNITS_PER_ROW);
    let viewport_height = VIEWPORT_ROWS * UNITS_PER_ROW;

    ScrollMetrics {
        offset: document_height.saturating_sub(viewport_height),
        viewport_height,
        document_height,
    }
}
