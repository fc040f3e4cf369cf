//! Event trait for the inputs a state machine reacts to.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for events that can be dispatched against a machine.
///
/// Events carry no payload; they only identify which handler of the
/// current state should run.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Event for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Button {
        Press,
        Release,
    }

    impl Event for Button {
        fn name(&self) -> &str {
            match self {
                Self::Press => "Press",
                Self::Release => "Release",
            }
        }
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(Button::Press.name(), "Press");
        assert_eq!(Button::Release.name(), "Release");
    }

    #[test]
    fn string_events_name_themselves() {
        assert_eq!(String::from("press off").name(), "press off");
        assert_eq!(Event::name(&"press first"), "press first");
    }
}
