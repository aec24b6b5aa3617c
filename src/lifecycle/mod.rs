//! Request lifecycle state machine: idle → loading → success / error.
//!
//! Owns the single in-flight invariant. `begin` hands out a ticket only
//! while no request is loading; a completion presenting a ticket that is no
//! longer current is discarded, so a superseded request can never overwrite
//! the state a newer one produced. The controller performs no I/O — the
//! command layer runs the client call between `begin` and `complete_*`.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

/// UI-observable request state. Exactly one holds at a time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RequestState {
    Idle,
    Loading,
    Success { prompt: String },
    Error { message: String },
}

/// Identity of one accepted request. Completions must present it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("A request is already in progress.")]
pub struct RequestInFlight;

/// Public handle to the controller; clone to share.
#[derive(Clone)]
pub struct LifecycleController {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    state: RequestState,
    current: Option<Uuid>,
}

impl LifecycleController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: RequestState::Idle,
                current: None,
            })),
        }
    }

    pub fn state(&self) -> RequestState {
        self.inner.lock().unwrap().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.inner.lock().unwrap().state, RequestState::Loading)
    }

    /// Accept a new request unless one is already loading. Generate and
    /// enhance both enter here; success and error states may be re-entered
    /// by a fresh request at any time.
    pub fn begin(&self) -> Result<Ticket, RequestInFlight> {
        let mut inner = self.inner.lock().unwrap();
        if matches!(inner.state, RequestState::Loading) {
            return Err(RequestInFlight);
        }

        let id = Uuid::new_v4();
        inner.state = RequestState::Loading;
        inner.current = Some(id);
        Ok(Ticket(id))
    }

    /// Terminal transition for a resolved client call. Returns false when
    /// the ticket is stale and the completion was discarded.
    pub fn complete_success(&self, ticket: Ticket, prompt: String) -> bool {
        self.complete(ticket, RequestState::Success { prompt })
    }

    /// Terminal transition for a rejected client call; `message` is the
    /// classified user-facing text.
    pub fn complete_error(&self, ticket: Ticket, message: String) -> bool {
        self.complete(ticket, RequestState::Error { message })
    }

    fn complete(&self, ticket: Ticket, terminal: RequestState) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.current != Some(ticket.0) {
            debug!("discarding completion for a superseded request");
            return false;
        }

        inner.state = terminal;
        inner.current = None;
        true
    }
}

impl Default for LifecycleController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_idle() {
        let controller = LifecycleController::new();
        assert_eq!(controller.state(), RequestState::Idle);
        assert!(!controller.is_loading());
    }

    #[test]
    fn generate_then_success_then_enhance_walks_the_machine() {
        let controller = LifecycleController::new();

        let ticket = controller.begin().unwrap();
        assert!(controller.is_loading());

        assert!(controller.complete_success(ticket, "generated".into()));
        assert_eq!(
            controller.state(),
            RequestState::Success { prompt: "generated".into() }
        );

        // enhance re-enters loading from success
        let ticket = controller.begin().unwrap();
        assert!(controller.is_loading());
        assert!(controller.complete_success(ticket, "refined".into()));
        assert_eq!(
            controller.state(),
            RequestState::Success { prompt: "refined".into() }
        );
    }

    #[test]
    fn second_request_while_loading_is_rejected() {
        let controller = LifecycleController::new();
        let ticket = controller.begin().unwrap();

        assert_eq!(controller.begin(), Err(RequestInFlight));
        // the rejected attempt must not have disturbed the accepted one
        assert!(controller.complete_error(ticket, "boom".into()));
        assert_eq!(
            controller.state(),
            RequestState::Error { message: "boom".into() }
        );
    }

    #[test]
    fn error_state_accepts_a_fresh_request() {
        let controller = LifecycleController::new();
        let ticket = controller.begin().unwrap();
        controller.complete_error(ticket, "quota".into());

        assert!(controller.begin().is_ok());
        assert!(controller.is_loading());
    }

    #[test]
    fn stale_ticket_completions_are_discarded() {
        let controller = LifecycleController::new();

        let first = controller.begin().unwrap();
        assert!(controller.complete_error(first, "gone".into()));

        let second = controller.begin().unwrap();

        // the abandoned request resolves late; nothing may change
        assert!(!controller.complete_success(first, "stale result".into()));
        assert!(controller.is_loading());

        assert!(controller.complete_success(second, "fresh result".into()));
        assert_eq!(
            controller.state(),
            RequestState::Success { prompt: "fresh result".into() }
        );
    }

    #[test]
    fn one_terminal_transition_per_request() {
        let controller = LifecycleController::new();
        let ticket = controller.begin().unwrap();

        assert!(controller.complete_success(ticket, "first".into()));
        assert!(!controller.complete_error(ticket, "late duplicate".into()));
        assert_eq!(
            controller.state(),
            RequestState::Success { prompt: "first".into() }
        );
    }
}
