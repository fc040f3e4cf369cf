//! Turnstile: a small thread-safe finite state machine engine
//!
//! A machine tracks one current state and a table of handlers keyed by
//! (state, event). Dispatching an event runs the handler registered for the
//! current state and moves the machine to whatever state the handler
//! returns.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: opaque, hashable identifiers (`State`, `Event` traits)
//! - **Handler**: a closure bound to one (state, event) pair returning the next state
//! - **StateMachine**: owns the table and current state behind one lock
//! - **DispatchError**: recoverable failures that leave the state unchanged
//!
//! Every committed transition is logged through `tracing` at `INFO`. The
//! library never installs a subscriber; the embedding application decides
//! where that output goes.
//!
//! # Example
//!
//! ```rust
//! use turnstile::{event_enum, state_enum, DispatchError, StateMachine};
//!
//! state_enum! {
//!     enum Power {
//!         Off,
//!         On,
//!     }
//! }
//!
//! event_enum! {
//!     enum Switch {
//!         TurnOn,
//!         TurnOff,
//!     }
//! }
//!
//! let machine = StateMachine::new(Power::Off);
//! machine
//!     .add_handler(Power::Off, Switch::TurnOn, || Power::On)
//!     .add_handler(Power::On, Switch::TurnOff, || Power::Off);
//!
//! assert_eq!(machine.dispatch(Switch::TurnOn), Ok(Power::On));
//! assert_eq!(machine.dispatch(Switch::TurnOff), Ok(Power::Off));
//!
//! let err = machine.dispatch(Switch::TurnOff).unwrap_err();
//! assert!(matches!(err, DispatchError::NoHandlerForEvent { .. }));
//! assert_eq!(machine.current_state(), Power::Off);
//! ```

// Macro output names `turnstile::` paths, which must resolve here as well.
extern crate self as turnstile;

pub mod builder;
pub mod core;
pub mod machine;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Event, Handler, State, StateTransition};
pub use crate::machine::{DispatchError, StateMachine, TransitionObserver, TransitionTable};
