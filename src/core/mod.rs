//! Core vocabulary of the state machine.
//!
//! This module contains the types every machine is built from:
//! - States and events via the `State` and `Event` traits
//! - Handlers that compute the successor state
//! - Records of committed transitions

mod event;
mod handler;
mod state;
mod transition;

pub use event::Event;
pub use handler::Handler;
pub use state::State;
pub use transition::StateTransition;
