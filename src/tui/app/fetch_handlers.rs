//! Turning session effects into bubbletea-rs commands.
//!
//! Fetches run through the [`SearchDriver`](crate::search::SearchDriver) and
//! spinner releases sleep on the tokio timer. Both come back as
//! [`AppMsg::Search`] messages carrying the event for the session.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::SearchApp;
use crate::github::error::GitHubError;
use crate::search::{Effect, SearchEvent};
use crate::tui::messages::AppMsg;

fn search_msg(event: SearchEvent) -> Option<Box<dyn Any + Send>> {
    Some(Box::new(AppMsg::Search(event)) as Box<dyn Any + Send>)
}

impl SearchApp {
    /// Feeds an event to the session and schedules its effect.
    pub(super) fn dispatch(&mut self, event: SearchEvent) -> Option<Cmd> {
        let effect = self.session.apply(event);
        self.clamp_scroll();
        effect.map(|next| self.command_for(next))
    }

    /// Builds the command that carries out `effect`.
    pub(super) fn command_for(&self, effect: Effect) -> Cmd {
        match effect {
            Effect::Fetch(request) => {
                if let Some(driver) = &self.driver {
                    let worker = driver.clone();
                    return Box::pin(async move { search_msg(worker.execute(request).await) });
                }

                let event = SearchEvent::FetchFailed {
                    ticket: request.ticket,
                    error: GitHubError::Configuration {
                        message: "search context not configured".to_owned(),
                    },
                };
                Box::pin(async move { search_msg(event) })
            }
            Effect::ReleaseSpinner { ticket, after } => Box::pin(async move {
                tokio::time::sleep(after).await;
                search_msg(SearchEvent::SpinnerReleased { ticket })
            }),
        }
    }

    /// Handles the synthetic start-up message.
    ///
    /// Only the first `Initialized` is acted on. When a start-up username was
    /// configured it is typed into the search field and submitted.
    pub(super) fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.initialized {
            return None;
        }
        self.initialized = true;

        let user = self.initial_user.take()?;
        self.session.apply(SearchEvent::InputChanged(user));
        self.dispatch(SearchEvent::Submit)
    }

    /// Creates a command that emits `Initialized` immediately.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
