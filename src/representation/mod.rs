//! Per-state configuration and the hierarchy algorithms.
//!
//! Every state value the machine has seen owns one `StateRepresentation`
//! inside a `StateGraph`. Representations hold the trigger behaviours and
//! entry/exit actions of their state and answer the hierarchy-aware questions
//! the machine asks while firing: which behaviour handles a trigger, which
//! actions run on entry and exit, and which states include which.

mod action;
mod behaviour;
mod graph;
mod state;

pub(crate) use action::{EntryAction, ExitAction};
pub(crate) use behaviour::{Decision, TriggerBehaviour};
pub(crate) use graph::{StateGraph, StateId};
