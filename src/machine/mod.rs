//! The state machine and its runtime plumbing.

#[allow(clippy::module_inception)]
mod machine;
mod policy;
mod storage;

pub use machine::{StateMachine, TransitionAction};
pub use policy::{UnhandledTriggerAction, UnhandledTriggerPolicy};
pub use storage::{ExternalStorage, InternalStorage, StateStorage};
