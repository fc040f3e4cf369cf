//! Core State trait for state machine states.
//!
//! A state is an opaque identifier. The engine only needs to compare and hash
//! it to find the handlers registered for it, and to name it in diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed back to callers by value
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states appear in error values
/// - `Send` + `Sync`: machines are shared across threads
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Closed.name(), "Closed");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
    }

    #[test]
    fn string_states_name_themselves() {
        let state = String::from("power off");
        assert_eq!(state.name(), "power off");
        assert_eq!("first gear".name(), "first gear");
    }

    #[test]
    fn states_can_key_a_set() {
        let mut seen = HashSet::new();
        seen.insert(TestState::Idle);
        seen.insert(TestState::Idle);
        seen.insert(TestState::Running);

        assert_eq!(seen.len(), 2);
    }
}
