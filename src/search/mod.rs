//! Repository search state machine.
//!
//! The search view is modelled as a reducer: [`SearchSession::apply`] takes a
//! [`SearchEvent`] and may hand back an [`Effect`]. The TUI and the listing
//! mode both feed the same session, executing fetch effects with a
//! [`SearchDriver`] and scheduling spinner releases on their own timers.

pub mod driver;
pub mod event;
pub mod feedback;
pub mod outcome;
pub mod phase;
pub mod scroll;
pub mod session;

pub use driver::SearchDriver;
pub use event::{Effect, FetchRequest, SearchEvent};
pub use feedback::{Notification, SearchError};
pub use outcome::PageOutcome;
pub use phase::{Fallback, FetchTicket, PendingFetch, SearchPhase};
pub use scroll::{ScrollMetrics, ScrollPolicy, ScrollThrottle, ScrollToTop};
pub use session::{SearchSession, SearchSettings};
