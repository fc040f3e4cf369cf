//! Handlers that compute the successor state of a transition.
//!
//! A handler is bound to exactly one (state, event) pair when it is
//! registered. It takes no arguments, may perform side effects, and returns
//! the state the machine moves into.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Callable bound to one (state, event) registration.
///
/// Handlers are reference counted so the same behavior can be registered
/// under several pairs without re-boxing the closure.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Handler;
///
/// let power_off = Handler::new(|| "power off");
///
/// assert_eq!(power_off.invoke(), "power off");
/// ```
pub struct Handler<S: State> {
    action: Arc<dyn Fn() -> S + Send + Sync>,
}

impl<S: State> Handler<S> {
    /// Create a handler from a closure returning the next state.
    ///
    /// The closure runs inside the machine's critical section, so it should
    /// be quick and must not dispatch into the same machine.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        Handler {
            action: Arc::new(action),
        }
    }

    /// Run the handler and return the state it selects.
    ///
    /// Every call runs the closure again; results are never cached.
    pub fn invoke(&self) -> S {
        (self.action)()
    }

    /// Check whether two handles share the same underlying closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.action, &other.action)
    }
}

impl<S: State> Clone for Handler<S> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
        }
    }
}

impl<S: State> fmt::Debug for Handler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

impl<S, F> From<F> for Handler<S>
where
    S: State,
    F: Fn() -> S + Send + Sync + 'static,
{
    fn from(action: F) -> Self {
        Handler::new(action)
    }
}
