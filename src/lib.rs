//! Stateful: hierarchical finite state machines configured in code.
//!
//! A [`StateMachine`] holds a current state and a set of configured states.
//! Each state declares which triggers it accepts and where they lead, optional
//! guards, entry and exit actions, and an optional super-state whose triggers
//! and actions it inherits.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: any `Clone + Eq + Hash + Debug` value type
//! - **Guards**: predicates that enable or disable a transition at fire time
//! - **Hierarchy**: sub-states inherit triggers; entry and exit actions of a
//!   super-state run only when the transition crosses its boundary
//! - **Parameterized triggers**: typed arguments carried from `fire_with` to
//!   dynamic destination selectors and entry actions
//!
//! # Example
//!
//! ```rust
//! use stateful::{state_enum, StateMachine};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! state_enum! {
//!     enum Call {
//!         OffHook,
//!         Ringing,
//!         Connected,
//!         OnHold,
//!     }
//! }
//!
//! state_enum! {
//!     enum Event {
//!         CallDialled,
//!         CallConnected,
//!         PlacedOnHold,
//!         TakenOffHold,
//!         HungUp,
//!     }
//! }
//!
//! # fn main() -> stateful::Result<()> {
//! let timer_running = Rc::new(Cell::new(false));
//! let mut call = StateMachine::new(Call::OffHook);
//!
//! call.configure(Call::OffHook)
//!     .permit(Event::CallDialled, Call::Ringing)?;
//! call.configure(Call::Ringing)
//!     .permit(Event::CallConnected, Call::Connected)?;
//! {
//!     let (start, stop) = (Rc::clone(&timer_running), Rc::clone(&timer_running));
//!     call.configure(Call::Connected)
//!         .on_entry(move |_| start.set(true))
//!         .on_exit(move |_| stop.set(false))
//!         .permit(Event::PlacedOnHold, Call::OnHold)?
//!         .permit(Event::HungUp, Call::OffHook)?;
//! }
//! call.configure(Call::OnHold)
//!     .sub_state_of(Call::Connected)?
//!     .permit(Event::TakenOffHold, Call::Connected)?;
//!
//! call.fire(Event::CallDialled)?;
//! call.fire(Event::CallConnected)?;
//! call.fire(Event::PlacedOnHold)?;
//!
//! assert_eq!(call.state(), Call::OnHold);
//! assert!(call.is_in_state(&Call::Connected));
//! assert!(timer_running.get());
//!
//! call.fire(Event::HungUp)?;
//! assert!(!timer_running.get());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;
mod representation;

// Re-export commonly used types
pub use builder::StateConfiguration;
pub use core::{Guard, Signature, State, Transition, Trigger, TriggerWithParameters};
pub use error::{ErrorKind, Result, StateMachineError};
pub use machine::{StateMachine, UnhandledTriggerPolicy};
