//! Support modules for the repository search BDD tests.

pub(crate) mod domain;
pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use domain::{Count, PageNumber};
pub(crate) use harness::{mount_not_found, mount_rate_limited, mount_repositories};
pub(crate) use state::{
    SearchState, bottom_metrics, drive, ensure_runtime_and_server, next_scroll_time,
    release_spinner,
};
