//! The state machine: current state, configured states and `fire`.

use super::policy::UnhandledTriggerPolicy;
use super::storage::{ExternalStorage, InternalStorage, StateStorage};
use crate::builder::StateConfiguration;
use crate::core::parameters::{FireArgs, TriggerRegistry};
use crate::core::{describe, State, Transition, Trigger, TriggerWithParameters};
use crate::error::Result;
use crate::representation::StateGraph;
use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace};

/// Callback invoked after every completed transition.
pub type TransitionAction<S, T> = Box<dyn Fn(&Transition<S, T>)>;

/// Models behaviour as transitions between a finite set of states.
///
/// States are configured through [`configure`](Self::configure); triggers are
/// fired with [`fire`](Self::fire) or, for triggers that carry arguments,
/// [`fire_with`](Self::fire_with).
///
/// Firing is synchronous. Every exit and entry action has run by the time
/// `fire` returns. `fire` borrows the machine mutably, so actions cannot fire
/// on the machine that is running them.
///
/// # Example
///
/// ```rust
/// use stateful::StateMachine;
///
/// # fn main() -> stateful::Result<()> {
/// let mut switch = StateMachine::new("Off");
/// switch.configure("Off").permit(' ', "On")?;
/// switch.configure("On").permit(' ', "Off")?;
///
/// switch.fire(' ')?;
/// assert_eq!(switch.state(), "On");
/// assert!(switch.can_fire(&' '));
/// assert!(switch.fire('x').is_err());
/// # Ok(())
/// # }
/// ```
pub struct StateMachine<S, T> {
    storage: Box<dyn StateStorage<S>>,
    graph: StateGraph<S, T>,
    parameters: TriggerRegistry<T>,
    unhandled: UnhandledTriggerPolicy<S, T>,
    on_transition: Option<TransitionAction<S, T>>,
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Create a machine that owns its state, starting in `initial`.
    pub fn new(initial: S) -> Self {
        Self::with_storage(InternalStorage::new(initial))
    }

    /// Create a machine whose state is read through `accessor` and written
    /// through `mutator`.
    pub fn with_external_state<A, M>(accessor: A, mutator: M) -> Self
    where
        A: Fn() -> S + 'static,
        M: FnMut(S) + 'static,
    {
        Self::with_storage(ExternalStorage::new(accessor, mutator))
    }

    /// Create a machine backed by a custom storage.
    pub fn with_storage<St>(storage: St) -> Self
    where
        St: StateStorage<S> + 'static,
    {
        Self {
            storage: Box::new(storage),
            graph: StateGraph::new(),
            parameters: TriggerRegistry::new(),
            unhandled: UnhandledTriggerPolicy::default(),
            on_transition: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> S {
        self.storage.load()
    }

    /// Begin configuration of the transitions and entry/exit actions of `state`.
    pub fn configure(&mut self, state: S) -> StateConfiguration<'_, S, T> {
        let id = self.graph.id_or_insert(state);
        trace!(states = self.graph.len(), "configuring state");
        StateConfiguration::new(&mut self.graph, &self.parameters, id)
    }

    /// Fire `trigger` from the current state.
    ///
    /// Fails if the trigger was registered with parameters, if guards for the
    /// trigger are not mutually exclusive, or if the trigger is unhandled and
    /// the unhandled-trigger policy is [`UnhandledTriggerPolicy::Fail`].
    pub fn fire(&mut self, trigger: T) -> Result<()> {
        self.internal_fire(trigger, FireArgs::none())
    }

    /// Fire a parameterized trigger, passing `args` to dynamic decisions and
    /// parameterized entry actions.
    pub fn fire_with<A: Any>(&mut self, trigger: &TriggerWithParameters<T, A>, args: A) -> Result<()> {
        self.internal_fire(trigger.trigger().clone(), FireArgs::of(&args))
    }

    /// Register a callback invoked after every transition. Replaces any
    /// previous callback.
    pub fn on_transition<F>(&mut self, action: F)
    where
        F: Fn(&Transition<S, T>) + 'static,
    {
        self.on_transition = Some(Box::new(action));
    }

    /// Handle unhandled triggers with `action` instead of failing.
    pub fn on_unhandled_trigger<F>(&mut self, action: F)
    where
        F: Fn(&S, &T) + 'static,
    {
        self.unhandled = UnhandledTriggerPolicy::custom(action);
    }

    /// Replace the unhandled-trigger policy.
    pub fn set_unhandled_trigger_policy(&mut self, policy: UnhandledTriggerPolicy<S, T>) {
        self.unhandled = policy;
    }

    /// True if the current state is `state` or one of its sub-states.
    pub fn is_in_state(&self, state: &S) -> bool {
        let current = self.state();
        match self.graph.find(&current) {
            Some(representation) => representation.is_included_in(state, &self.graph),
            None => current == *state,
        }
    }

    /// True if `trigger` has a handler with a passing guard in the current
    /// state or its super-states.
    pub fn can_fire(&self, trigger: &T) -> bool {
        self.graph
            .find(&self.state())
            .is_some_and(|representation| representation.can_handle(trigger, &self.graph))
    }

    /// Declare that `trigger` is fired with arguments of type `A`.
    ///
    /// Use a tuple for several arguments. A trigger's parameters can only be
    /// set once.
    pub fn set_trigger_parameters<A: Any>(
        &mut self,
        trigger: T,
    ) -> Result<TriggerWithParameters<T, A>> {
        self.parameters.register(trigger)
    }

    /// The triggers that can currently be fired.
    pub fn permitted_triggers(&self) -> HashSet<T> {
        self.graph
            .find(&self.state())
            .map(|representation| representation.permitted_triggers(&self.graph))
            .unwrap_or_default()
    }

    fn internal_fire(&mut self, trigger: T, args: FireArgs<'_>) -> Result<()> {
        self.parameters.verify(&trigger, args.signature())?;

        let source = self.storage.load();
        let current = self.graph.id_or_insert(source.clone());
        debug!(state = ?source, ?trigger, "firing trigger");

        let handler = self
            .graph
            .get(current)
            .try_find_handler(&trigger, &self.graph)?;
        let Some(handler) = handler else {
            return self.unhandled.handle(&source, &trigger);
        };
        let Some(destination) = handler.results_in_transition_from(&source, args)? else {
            debug!(state = ?source, ?trigger, "trigger ignored");
            return Ok(());
        };

        let transition = Transition::new(source, destination, trigger);
        let next = self.graph.id_or_insert(transition.destination().clone());

        self.graph.get(current).exit(&transition, &self.graph);
        self.storage.store(transition.destination().clone());
        self.graph.get(next).enter(&transition, args, &self.graph);
        debug!(
            source = ?transition.source(),
            destination = ?transition.destination(),
            trigger = ?transition.trigger(),
            "transition complete"
        );

        if let Some(action) = &self.on_transition {
            action(&transition);
        }
        Ok(())
    }
}

impl<S: State, T: Trigger> fmt::Display for StateMachine<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut triggers: Vec<String> = self.permitted_triggers().iter().map(describe).collect();
        triggers.sort();
        write!(
            f,
            "state_machine {{ state = {:?}, permitted triggers = {{ {} }} }}",
            self.state(),
            triggers.join(", ")
        )
    }
}

impl<S: State, T: Trigger> fmt::Debug for StateMachine<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &self.state())
            .field("states", &self.graph.len())
            .field("unhandled", &self.unhandled)
            .finish_non_exhaustive()
    }
}
