//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and macros for declaring state and
//! event vocabularies with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::core::{Handler, State};

/// Create a handler that always moves to `state`.
///
/// # Example
///
/// ```
/// use turnstile::builder::{goto, StateMachineBuilder};
///
/// let machine = StateMachineBuilder::new()
///     .initial("Red")
///     .handler("Red", "tick", goto("Green"))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.dispatch("tick"), Ok("Green"));
/// ```
pub fn goto<S: State>(state: S) -> Handler<S> {
    Handler::new(move || state.clone())
}
