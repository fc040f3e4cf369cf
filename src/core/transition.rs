//! Records of committed state transitions.
//!
//! A record is produced for every successful dispatch and handed to the
//! machine's transition observers.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single committed transition.
///
/// Records are plain values. When the state and event types implement
/// serde's traits the record can be serialized, e.g. to JSON lines.
///
/// # Example
///
/// ```rust
/// use turnstile::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "power off",
///     to: "first gear",
///     event: "press first",
///     sequence: 1,
///     timestamp: Utc::now(),
/// };
///
/// assert!(transition.changed_state());
/// assert_eq!(transition.describe(), "[power off] -> [first gear]");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, E> {
    /// The state the machine was in when the event arrived
    pub from: S,
    /// The state returned by the handler
    pub to: S,
    /// The event that was dispatched
    pub event: E,
    /// Position of this transition among the machine's committed transitions, starting at 1
    pub sequence: u64,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

impl<S: State, E: Event> StateTransition<S, E> {
    /// Whether the handler moved the machine to a different state.
    ///
    /// Self-transitions (the handler returning the current state) are still
    /// committed and still recorded.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }

    /// Human-readable `[from] -> [to]` line.
    pub fn describe(&self) -> String {
        format!("[{}] -> [{}]", self.from.name(), self.to.name())
    }
}
