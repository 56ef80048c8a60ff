//! Errors raised while configuring or firing a state machine.

use thiserror::Error;

/// Broad classification of a [`StateMachineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The machine was configured (or fired) in a way its rules forbid.
    Configuration,

    /// A trigger was fired that the current state does not handle.
    UnhandledTrigger,

    /// An internal invariant of the engine was broken.
    ContractViolation,
}

/// Errors that can occur when configuring or firing a state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateMachineError {
    #[error(
        "permit() and permit_if() require that the destination state is not equal to the \
         source state '{state}'. To accept a trigger without changing state, use either \
         ignore() or permit_reentry()"
    )]
    IdentityTransition { state: String },

    #[error("Cannot reconfigure parameters of trigger '{trigger}'")]
    TriggerParametersAlreadySet { trigger: String },

    #[error(
        "Multiple permitted exit transitions are configured from state '{state}' for trigger \
         '{trigger}'. Guard clauses must be mutually exclusive"
    )]
    AmbiguousGuards { state: String, trigger: String },

    #[error(
        "Invalid number or type of parameters for trigger '{trigger}': expected {expected}, \
         got {actual}"
    )]
    ParameterMismatch {
        trigger: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Trigger '{trigger}' has no parameters registered with {expected} in this machine")]
    UnregisteredTrigger {
        trigger: String,
        expected: &'static str,
    },

    #[error("State '{state}' cannot be a sub-state of '{super_state}': it would be its own ancestor")]
    CyclicHierarchy { state: String, super_state: String },

    #[error("State '{state}' is already a sub-state of '{existing}', cannot also be one of '{requested}'")]
    SuperStateConflict {
        state: String,
        existing: String,
        requested: String,
    },

    #[error(
        "No valid leaving transitions are permitted from state '{state}' for trigger '{trigger}'. \
         Consider ignoring the trigger"
    )]
    UnhandledTrigger { state: String, trigger: String },

    #[error(
        "Unable to find a suitable handler for trigger '{trigger}' in state '{state}': \
         the handler expects {expected}, got {actual}"
    )]
    HandlerMismatch {
        state: String,
        trigger: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl StateMachineError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnhandledTrigger { .. } => ErrorKind::UnhandledTrigger,
            Self::HandlerMismatch { .. } => ErrorKind::ContractViolation,
            _ => ErrorKind::Configuration,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StateMachineError>;
