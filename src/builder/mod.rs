//! Builder API for configuring states.
//!
//! [`StateConfiguration`] is the fluent handle returned by
//! `StateMachine::configure`; the `state_enum!` macro declares enums that can
//! be used as state and trigger types with minimal boilerplate.

mod configuration;
pub mod macros;

pub use configuration::StateConfiguration;
