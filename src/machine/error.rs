//! Dispatch errors.

use crate::core::{Event, State};
use thiserror::Error;

/// Errors returned by [`StateMachine::dispatch`](super::StateMachine::dispatch).
///
/// Both kinds are recoverable: the machine's state is left unchanged and the
/// caller decides whether to retry, ignore, or report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError<S: State, E: Event> {
    #[error("no handlers registered for state '{}'", .state.name())]
    NoHandlersForState { state: S },

    #[error("event '{}' cannot be triggered in state '{}'", .event.name(), .state.name())]
    NoHandlerForEvent { state: S, event: E },
}

impl<S: State, E: Event> DispatchError<S, E> {
    /// The state the machine was (and still is) in when dispatch failed.
    pub fn state(&self) -> &S {
        match self {
            DispatchError::NoHandlersForState { state } => state,
            DispatchError::NoHandlerForEvent { state, .. } => state,
        }
    }

    /// The rejected event, when the state had other handlers registered.
    pub fn event(&self) -> Option<&E> {
        match self {
            DispatchError::NoHandlersForState { .. } => None,
            DispatchError::NoHandlerForEvent { event, .. } => Some(event),
        }
    }
}
