//! Fluent configuration of a single state.

use crate::core::parameters::TriggerRegistry;
use crate::core::{describe, Guard, Signature, State, Transition, Trigger, TriggerWithParameters};
use crate::error::{Result, StateMachineError};
use crate::representation::{
    Decision, EntryAction, ExitAction, StateGraph, StateId, TriggerBehaviour,
};
use std::any::Any;

/// The configuration for a single state value.
///
/// Obtained from `StateMachine::configure`. Every method consumes and returns
/// the configuration so calls chain; fallible methods return a `Result` and
/// chain with `?`.
///
/// # Example
///
/// ```rust
/// use stateful::StateMachine;
///
/// # fn main() -> stateful::Result<()> {
/// let mut phone = StateMachine::new("OffHook");
/// phone
///     .configure("OffHook")
///     .permit("CallDialled", "Ringing")?;
/// phone
///     .configure("Ringing")
///     .permit("HungUp", "OffHook")?
///     .permit("CallConnected", "Connected")?;
///
/// phone.fire("CallDialled")?;
/// assert_eq!(phone.state(), "Ringing");
/// # Ok(())
/// # }
/// ```
pub struct StateConfiguration<'a, S, T> {
    graph: &'a mut StateGraph<S, T>,
    parameters: &'a TriggerRegistry<T>,
    id: StateId,
}

impl<'a, S: State, T: Trigger> StateConfiguration<'a, S, T> {
    pub(crate) fn new(
        graph: &'a mut StateGraph<S, T>,
        parameters: &'a TriggerRegistry<T>,
        id: StateId,
    ) -> Self {
        Self {
            graph,
            parameters,
            id,
        }
    }

    /// The state being configured.
    pub fn state(&self) -> &S {
        self.graph.get(self.id).underlying_state()
    }

    /// Accept `trigger` and transition to `destination`.
    ///
    /// Fails if `destination` is the configured state; use
    /// [`permit_reentry`](Self::permit_reentry) or [`ignore`](Self::ignore) instead.
    pub fn permit(self, trigger: T, destination: S) -> Result<Self> {
        self.permit_if(trigger, destination, || true)
    }

    /// Accept `trigger` and transition to `destination` while `guard` passes.
    pub fn permit_if<G>(self, trigger: T, destination: S, guard: G) -> Result<Self>
    where
        G: Fn() -> bool + 'static,
    {
        self.enforce_not_identity_transition(&destination)?;
        Ok(self.internal_permit(trigger, destination, Guard::new(guard)))
    }

    /// Accept `trigger`, run this state's exit actions and then its entry
    /// actions again. Super-state actions do not run.
    pub fn permit_reentry(self, trigger: T) -> Self {
        self.permit_reentry_if(trigger, || true)
    }

    /// Guarded form of [`permit_reentry`](Self::permit_reentry).
    pub fn permit_reentry_if<G>(self, trigger: T, guard: G) -> Self
    where
        G: Fn() -> bool + 'static,
    {
        let destination = self.state().clone();
        self.internal_permit(trigger, destination, Guard::new(guard))
    }

    /// Accept `trigger` without changing state or running any action.
    pub fn ignore(self, trigger: T) -> Self {
        self.ignore_if(trigger, || true)
    }

    /// Guarded form of [`ignore`](Self::ignore).
    pub fn ignore_if<G>(self, trigger: T, guard: G) -> Self
    where
        G: Fn() -> bool + 'static,
    {
        let behaviour = TriggerBehaviour::new(trigger, Guard::new(guard), Decision::Ignore);
        self.graph.get_mut(self.id).add_trigger_behaviour(behaviour);
        self
    }

    /// Run `action` whenever the state is entered.
    pub fn on_entry<F>(self, action: F) -> Self
    where
        F: Fn(&Transition<S, T>) + 'static,
    {
        self.add_entry_action(EntryAction::plain(None, action))
    }

    /// Run `action` whenever the state is entered by a fire carrying
    /// arguments of type `A`. Fires with other arguments skip it.
    pub fn on_entry_with<A, F>(self, action: F) -> Self
    where
        A: Any,
        F: Fn(&Transition<S, T>, &A) + 'static,
    {
        self.add_entry_action(EntryAction::parameterized(None, action))
    }

    /// Run `action` when the state is entered through `trigger`.
    ///
    /// Fails if `trigger` was registered with parameters; use
    /// [`on_entry_from_with`](Self::on_entry_from_with) instead.
    pub fn on_entry_from<F>(self, trigger: T, action: F) -> Result<Self>
    where
        F: Fn(&Transition<S, T>) + 'static,
    {
        self.enforce_argument_less(&trigger)?;
        Ok(self.add_entry_action(EntryAction::plain(Some(trigger), action)))
    }

    /// Run `action` with the fire-time arguments when the state is entered
    /// through the parameterized trigger `token`.
    pub fn on_entry_from_with<A, F>(
        self,
        token: &TriggerWithParameters<T, A>,
        action: F,
    ) -> Result<Self>
    where
        A: Any,
        F: Fn(&Transition<S, T>, &A) + 'static,
    {
        self.parameters.verify_token(token)?;
        let trigger = token.trigger().clone();
        Ok(self.add_entry_action(EntryAction::parameterized(Some(trigger), action)))
    }

    /// Run `action` whenever the state is exited.
    pub fn on_exit<F>(self, action: F) -> Self
    where
        F: Fn(&Transition<S, T>) + 'static,
    {
        self.graph
            .get_mut(self.id)
            .add_exit_action(ExitAction::new(action));
        self
    }

    /// Make the configured state a sub-state of `super_state`.
    ///
    /// Sub-states inherit the permitted triggers of their super-state. Entering
    /// a sub-state from outside the super-state runs the super-state's entry
    /// actions first; leaving to outside runs its exit actions last.
    pub fn sub_state_of(self, super_state: S) -> Result<Self> {
        let parent = self.graph.id_or_insert(super_state);
        self.graph.link(self.id, parent)?;
        Ok(self)
    }

    /// Accept `trigger` and transition to the state computed by `decision`.
    pub fn permit_dynamic<F>(self, trigger: T, decision: F) -> Result<Self>
    where
        F: Fn() -> S + 'static,
    {
        self.permit_dynamic_if(trigger, || true, decision)
    }

    /// Guarded form of [`permit_dynamic`](Self::permit_dynamic).
    pub fn permit_dynamic_if<G, F>(self, trigger: T, guard: G, decision: F) -> Result<Self>
    where
        G: Fn() -> bool + 'static,
        F: Fn() -> S + 'static,
    {
        self.enforce_argument_less(&trigger)?;
        let decision = Decision::dynamic(move |_: &()| decision());
        Ok(self.add_behaviour(trigger, Guard::new(guard), decision))
    }

    /// Accept the parameterized trigger `token` and transition to the state
    /// `decision` computes from the fire-time arguments.
    pub fn permit_dynamic_with<A, F>(
        self,
        token: &TriggerWithParameters<T, A>,
        decision: F,
    ) -> Result<Self>
    where
        A: Any,
        F: Fn(&A) -> S + 'static,
    {
        self.permit_dynamic_with_if(token, || true, decision)
    }

    /// Guarded form of [`permit_dynamic_with`](Self::permit_dynamic_with).
    pub fn permit_dynamic_with_if<A, G, F>(
        self,
        token: &TriggerWithParameters<T, A>,
        guard: G,
        decision: F,
    ) -> Result<Self>
    where
        A: Any,
        G: Fn() -> bool + 'static,
        F: Fn(&A) -> S + 'static,
    {
        self.parameters.verify_token(token)?;
        let trigger = token.trigger().clone();
        Ok(self.add_behaviour(trigger, Guard::new(guard), Decision::dynamic(decision)))
    }

    fn enforce_not_identity_transition(&self, destination: &S) -> Result<()> {
        if destination == self.state() {
            return Err(StateMachineError::IdentityTransition {
                state: describe(destination),
            });
        }
        Ok(())
    }

    fn enforce_argument_less(&self, trigger: &T) -> Result<()> {
        match self.parameters.signature(trigger) {
            Some(registered) if !registered.is_none() => {
                Err(StateMachineError::ParameterMismatch {
                    trigger: describe(trigger),
                    expected: registered.name(),
                    actual: Signature::none().name(),
                })
            }
            _ => Ok(()),
        }
    }

    fn internal_permit(self, trigger: T, destination: S, guard: Guard) -> Self {
        self.graph.id_or_insert(destination.clone());
        self.add_behaviour(trigger, guard, Decision::Fixed(destination))
    }

    fn add_behaviour(self, trigger: T, guard: Guard, decision: Decision<S>) -> Self {
        let behaviour = TriggerBehaviour::new(trigger, guard, decision);
        self.graph.get_mut(self.id).add_trigger_behaviour(behaviour);
        self
    }

    fn add_entry_action(self, action: EntryAction<S, T>) -> Self {
        self.graph.get_mut(self.id).add_entry_action(action);
        self
    }
}
