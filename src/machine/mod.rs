//! Thread-safe state machine that dispatches events to registered handlers.
//!
//! The machine owns a [`TransitionTable`] and the current state behind a
//! single mutex. Registration and dispatch both take that lock, so a
//! machine can be shared through an `Arc` and used from many threads.
//!
//! # Dispatch
//!
//! Each call to [`StateMachine::dispatch`] is one atomic step:
//!
//! 1. lock the machine
//! 2. look up the handler for (current state, event)
//! 3. invoke it and commit the state it returns
//! 4. log the transition and notify observers
//!
//! The lock is held for the whole sequence and released on every exit path,
//! so concurrent dispatches behave as if they ran in some sequential order.

mod error;
mod table;

pub use error::DispatchError;
pub use table::TransitionTable;

use crate::core::{Event, Handler, State, StateTransition};
use chrono::Utc;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Callback notified of every committed transition.
pub type TransitionObserver<S, E> = Arc<dyn Fn(&StateTransition<S, E>) + Send + Sync>;

/// Label used in diagnostics when a machine is not given a name.
pub const DEFAULT_MACHINE_NAME: &str = "fsm";

struct Inner<S: State, E: Event> {
    current: S,
    table: TransitionTable<S, E>,
    sequence: u64,
    observers: Vec<TransitionObserver<S, E>>,
}

/// Finite state machine with per-state event handlers.
///
/// # Example
///
/// ```rust
/// use turnstile::{DispatchError, StateMachine};
///
/// let machine = StateMachine::new("Off");
/// machine
///     .add_handler("Off", "TurnOn", || "On")
///     .add_handler("On", "TurnOff", || "Off");
///
/// assert_eq!(machine.dispatch("TurnOn"), Ok("On"));
/// assert_eq!(machine.dispatch("TurnOff"), Ok("Off"));
/// assert_eq!(
///     machine.dispatch("TurnOff"),
///     Err(DispatchError::NoHandlerForEvent { state: "Off", event: "TurnOff" })
/// );
/// assert_eq!(machine.current_state(), "Off");
/// ```
pub struct StateMachine<S: State, E: Event> {
    name: String,
    inner: Mutex<Inner<S, E>>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine in `initial` with an empty transition table.
    pub fn new(initial: S) -> Self {
        Self::named(DEFAULT_MACHINE_NAME, initial)
    }

    /// Create a machine whose diagnostics are labelled with `name`.
    pub fn named(name: impl Into<String>, initial: S) -> Self {
        Self {
            name: name.into(),
            inner: Mutex::new(Inner {
                current: initial,
                table: TransitionTable::new(),
                sequence: 0,
                observers: Vec::new(),
            }),
        }
    }

    /// Register `handler` for `event` while in `state`.
    ///
    /// Registration is always accepted. A second registration for the same
    /// pair replaces the first. Returns `self` so calls can be chained.
    pub fn add_handler<H>(&self, state: S, event: E, handler: H) -> &Self
    where
        H: Into<Handler<S>>,
    {
        let mut inner = self.inner.lock();
        tracing::debug!(
            machine = %self.name,
            "registering handler for event [{}] in state [{}]",
            event.name(),
            state.name()
        );
        if inner
            .table
            .insert(state.clone(), event.clone(), handler.into())
            .is_some()
        {
            tracing::debug!(
                machine = %self.name,
                "replaced handler for event [{}] in state [{}]",
                event.name(),
                state.name()
            );
        }
        self
    }

    /// Register an observer called after every committed transition.
    ///
    /// Observers run inside the critical section, in commit order, after
    /// the new state and sequence number are stored. An observer that calls
    /// back into the same machine (`current_state`, `dispatch`, ...)
    /// deadlocks. A panicking observer unwinds out of `dispatch` with the
    /// transition already committed, and the observers after it are skipped.
    pub fn on_transition<F>(&self, observer: F) -> &Self
    where
        F: Fn(&StateTransition<S, E>) + Send + Sync + 'static,
    {
        self.push_observer(Arc::new(observer));
        self
    }

    pub(crate) fn push_observer(&self, observer: TransitionObserver<S, E>) {
        self.inner.lock().observers.push(observer);
    }

    /// Apply `event` to the current state.
    ///
    /// On success the handler's return value becomes the current state and
    /// is returned. On failure the state is unchanged and no transition is
    /// logged.
    ///
    /// The handler and any observers run while the machine is locked. A
    /// handler or observer that calls back into the same machine deadlocks.
    pub fn dispatch(&self, event: E) -> Result<S, DispatchError<S, E>> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let next = inner.table.lookup(&inner.current, &event)?.invoke();
        let from = std::mem::replace(&mut inner.current, next.clone());
        inner.sequence += 1;

        tracing::info!(
            machine = %self.name,
            event = %event.name(),
            sequence = inner.sequence,
            "state changed [{}] -> [{}]",
            from.name(),
            next.name()
        );

        if !inner.observers.is_empty() {
            let record = StateTransition {
                from,
                to: next.clone(),
                event,
                sequence: inner.sequence,
                timestamp: Utc::now(),
            };
            for observer in &inner.observers {
                observer(&record);
            }
        }

        Ok(next)
    }

    /// Get a copy of the current state.
    pub fn current_state(&self) -> S {
        self.inner.lock().current.clone()
    }

    /// Whether a handler is registered for the pair.
    pub fn handles(&self, state: &S, event: &E) -> bool {
        self.inner.lock().table.handles(state, event)
    }

    /// Number of transitions committed so far.
    pub fn transitions(&self) -> u64 {
        self.inner.lock().sequence
    }

    /// The label used in this machine's diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S: State, E: Event> fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("StateMachine");
        debug.field("name", &self.name);
        match self.inner.try_lock() {
            Some(inner) => debug
                .field("current", &inner.current)
                .field("handlers", &inner.table.len())
                .field("transitions", &inner.sequence),
            None => debug.field("current", &"<locked>"),
        };
        debug.finish()
    }
}
