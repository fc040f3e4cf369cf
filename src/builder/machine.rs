//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, Handler, State, StateTransition};
use crate::machine::{StateMachine, TransitionObserver, DEFAULT_MACHINE_NAME};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// Collecting the whole table before calling [`build`](Self::build) keeps
/// registration and dispatch in separate phases. The built machine still
/// accepts further [`add_handler`](StateMachine::add_handler) calls.
pub struct StateMachineBuilder<S: State, E: Event> {
    name: String,
    initial: Option<S>,
    handlers: Vec<(S, E, Handler<S>)>,
    observers: Vec<TransitionObserver<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_MACHINE_NAME.to_string(),
            initial: None,
            handlers: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Set the label used in diagnostics.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register a handler for `event` while in `state`.
    /// Later registrations for the same pair win.
    pub fn handler<H>(mut self, state: S, event: E, handler: H) -> Self
    where
        H: Into<Handler<S>>,
    {
        self.handlers.push((state, event, handler.into()));
        self
    }

    /// Register the same handler for `event` in each of `states`.
    pub fn handler_from_each<I, H>(mut self, states: I, event: E, handler: H) -> Self
    where
        I: IntoIterator<Item = S>,
        H: Into<Handler<S>>,
    {
        let handler = handler.into();
        for state in states {
            self.handlers.push((state, event.clone(), handler.clone()));
        }
        self
    }

    /// Add a transition observer.
    pub fn observe<F>(mut self, observer: F) -> Self
    where
        F: Fn(&StateTransition<S, E>) + Send + Sync + 'static,
    {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let machine = StateMachine::named(self.name, initial);
        for (state, event, handler) in self.handlers {
            machine.add_handler(state, event, handler);
        }
        for observer in self.observers {
            machine.push_observer(observer);
        }

        Ok(machine)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
