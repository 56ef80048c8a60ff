//! Bounds for the values that identify states and triggers.
//!
//! States and triggers are opaque identifiers: the engine only compares them,
//! hashes them for lookup and renders them for diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for values that identify a state.
///
/// Implemented for every type that is `Clone + Eq + Hash + Debug + 'static`, so
/// enums, strings and integers can be used directly.
///
/// # Example
///
/// ```rust
/// use stateful::core::State;
///
/// fn accepts_state<S: State>(_state: S) {}
///
/// accepts_state("Idle");
/// accepts_state(String::from("Running"));
/// accepts_state(42u32);
/// ```
pub trait State: Clone + Eq + Hash + Debug + 'static {}

impl<S> State for S where S: Clone + Eq + Hash + Debug + 'static {}

/// Trait for values that identify a trigger.
///
/// Same bounds as [`State`]; kept separate so signatures read clearly.
pub trait Trigger: Clone + Eq + Hash + Debug + 'static {}

impl<T> Trigger for T where T: Clone + Eq + Hash + Debug + 'static {}

/// Render a state or trigger for logs and error messages.
pub(crate) fn describe<V: Debug>(value: &V) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Light {
        Red,
        Green,
    }

    fn is_state<S: State>(_: &S) -> bool {
        true
    }

    fn is_trigger<T: Trigger>(_: &T) -> bool {
        true
    }

    #[test]
    fn plain_enums_are_states_and_triggers() {
        assert!(is_state(&Light::Red));
        assert!(is_trigger(&Light::Green));
    }

    #[test]
    fn strings_and_integers_are_states() {
        assert!(is_state(&"On"));
        assert!(is_state(&String::from("Off")));
        assert!(is_state(&7i64));
        assert!(is_trigger(&' '));
    }

    #[test]
    fn describe_uses_debug_rendering() {
        assert_eq!(describe(&Light::Red), "Red");
        assert_eq!(describe(&"On"), "\"On\"");
        assert_eq!(describe(&3u8), "3");
    }
}
