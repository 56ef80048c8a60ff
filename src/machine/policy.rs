//! What happens when a fired trigger has no handler.

use crate::core::{describe, State, Trigger};
use crate::error::{Result, StateMachineError};
use std::fmt;
use tracing::warn;

/// Callback invoked with the current state and the unhandled trigger.
pub type UnhandledTriggerAction<S, T> = Box<dyn Fn(&S, &T)>;

/// Policy applied when a trigger is fired that the current state (and its
/// super-states) do not handle.
pub enum UnhandledTriggerPolicy<S, T> {
    /// Return [`StateMachineError::UnhandledTrigger`] from `fire`.
    Fail,

    /// Silently accept the trigger.
    Ignore,

    /// Log a warning and accept the trigger.
    Log,

    /// Hand the state and trigger to a callback and accept the trigger.
    Custom(UnhandledTriggerAction<S, T>),
}

impl<S: State, T: Trigger> UnhandledTriggerPolicy<S, T> {
    /// Wrap `action` in a [`Custom`](Self::Custom) policy.
    pub fn custom<F>(action: F) -> Self
    where
        F: Fn(&S, &T) + 'static,
    {
        Self::Custom(Box::new(action))
    }

    pub(crate) fn handle(&self, state: &S, trigger: &T) -> Result<()> {
        match self {
            Self::Fail => Err(StateMachineError::UnhandledTrigger {
                state: describe(state),
                trigger: describe(trigger),
            }),
            Self::Ignore => Ok(()),
            Self::Log => {
                warn!(?state, ?trigger, "ignoring unhandled trigger");
                Ok(())
            }
            Self::Custom(action) => {
                action(state, trigger);
                Ok(())
            }
        }
    }
}

impl<S, T> Default for UnhandledTriggerPolicy<S, T> {
    fn default() -> Self {
        Self::Fail
    }
}

impl<S, T> fmt::Debug for UnhandledTriggerPolicy<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => f.write_str("Fail"),
            Self::Ignore => f.write_str("Ignore"),
            Self::Log => f.write_str("Log"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
