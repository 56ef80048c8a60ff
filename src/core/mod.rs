//! Core value types of the state machine.
//!
//! This module contains the small, self-contained building blocks:
//! - State and trigger bounds via the `State` and `Trigger` traits
//! - Guard predicates for transition control
//! - The immutable `Transition` record
//! - Parameterized trigger tokens and their registry

mod guard;
pub(crate) mod parameters;
mod state;
mod transition;

pub use guard::Guard;
pub use parameters::{Signature, TriggerWithParameters};
pub use state::{State, Trigger};
pub use transition::Transition;

pub(crate) use state::describe;
