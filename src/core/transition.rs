//! The record of a single firing.

use serde::{Deserialize, Serialize};

/// Describes a transition between two states caused by a trigger.
///
/// Transitions are immutable values handed to entry actions, exit actions and
/// the machine's transition callback.
///
/// # Example
///
/// ```rust
/// use stateful::core::Transition;
///
/// let transition = Transition::new("Ringing", "Connected", "CallConnected");
/// assert_eq!(transition.source(), &"Ringing");
/// assert_eq!(transition.destination(), &"Connected");
/// assert!(!transition.is_reentry());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<S, T> {
    source: S,
    destination: S,
    trigger: T,
}

impl<S: PartialEq, T> Transition<S, T> {
    /// Create a transition record.
    pub fn new(source: S, destination: S, trigger: T) -> Self {
        Self {
            source,
            destination,
            trigger,
        }
    }

    /// The state transitioned from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The state transitioned to.
    pub fn destination(&self) -> &S {
        &self.destination
    }

    /// The trigger that caused the transition.
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    /// True if the transition is a re-entry, i.e. the identity transition.
    pub fn is_reentry(&self) -> bool {
        self.source == self.destination
    }
}
