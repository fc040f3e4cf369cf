//! Transition table mapping (state, event) pairs to handlers.

use crate::core::{Event, Handler, State};
use crate::machine::error::DispatchError;
use std::collections::HashMap;

/// Registration of (state, event) -> handler mappings.
///
/// Entries may exist for states the machine never reaches. Registering an
/// existing pair replaces its handler.
pub struct TransitionTable<S: State, E: Event> {
    handlers: HashMap<S, HashMap<E, Handler<S>>>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for the pair, returning the handler it replaced.
    pub fn insert(&mut self, state: S, event: E, handler: Handler<S>) -> Option<Handler<S>> {
        self.handlers
            .entry(state)
            .or_default()
            .insert(event, handler)
    }

    /// Find the handler for `event` in `state`.
    ///
    /// A state with no registrations at all fails with
    /// [`DispatchError::NoHandlersForState`]; a known state without this
    /// event fails with [`DispatchError::NoHandlerForEvent`].
    pub fn lookup(&self, state: &S, event: &E) -> Result<&Handler<S>, DispatchError<S, E>> {
        let events = self
            .handlers
            .get(state)
            .ok_or_else(|| DispatchError::NoHandlersForState {
                state: state.clone(),
            })?;

        events
            .get(event)
            .ok_or_else(|| DispatchError::NoHandlerForEvent {
                state: state.clone(),
                event: event.clone(),
            })
    }

    /// Whether a handler is registered for the pair.
    pub fn handles(&self, state: &S, event: &E) -> bool {
        self.handlers
            .get(state)
            .is_some_and(|events| events.contains_key(event))
    }

    /// Number of registered (state, event) pairs.
    pub fn len(&self) -> usize {
        self.handlers.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
