//! The configured node for a single state value.

use super::action::{EntryAction, ExitAction};
use super::behaviour::TriggerBehaviour;
use super::graph::{StateGraph, StateId};
use crate::core::parameters::FireArgs;
use crate::core::{describe, State, Transition, Trigger};
use crate::error::{Result, StateMachineError};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Trigger behaviours, entry/exit actions and hierarchy links of one state.
///
/// Super- and sub-state links are ids into the owning `StateGraph`; every
/// traversal takes the graph as an argument.
#[derive(Debug)]
pub(crate) struct StateRepresentation<S, T> {
    state: S,
    trigger_behaviours: HashMap<T, Vec<TriggerBehaviour<S, T>>>,
    entry_actions: Vec<EntryAction<S, T>>,
    exit_actions: Vec<ExitAction<S, T>>,
    super_state: Option<StateId>,
    sub_states: Vec<StateId>,
}

impl<S: State, T: Trigger> StateRepresentation<S, T> {
    pub(crate) fn new(state: S) -> Self {
        Self {
            state,
            trigger_behaviours: HashMap::new(),
            entry_actions: Vec::new(),
            exit_actions: Vec::new(),
            super_state: None,
            sub_states: Vec::new(),
        }
    }

    pub(crate) fn underlying_state(&self) -> &S {
        &self.state
    }

    pub(crate) fn super_state(&self) -> Option<StateId> {
        self.super_state
    }

    pub(crate) fn set_super_state(&mut self, super_state: StateId) {
        self.super_state = Some(super_state);
    }

    pub(crate) fn add_sub_state(&mut self, sub_state: StateId) {
        self.sub_states.push(sub_state);
    }

    pub(crate) fn add_trigger_behaviour(&mut self, behaviour: TriggerBehaviour<S, T>) {
        self.trigger_behaviours
            .entry(behaviour.trigger().clone())
            .or_default()
            .push(behaviour);
    }

    pub(crate) fn add_entry_action(&mut self, action: EntryAction<S, T>) {
        self.entry_actions.push(action);
    }

    pub(crate) fn add_exit_action(&mut self, action: ExitAction<S, T>) {
        self.exit_actions.push(action);
    }

    /// True if this state or one of its ancestors has a behaviour for
    /// `trigger` whose guard currently passes.
    pub(crate) fn can_handle(&self, trigger: &T, graph: &StateGraph<S, T>) -> bool {
        let local = self
            .trigger_behaviours
            .get(trigger)
            .is_some_and(|candidates| candidates.iter().any(|c| c.is_condition_met()));
        local
            || self
                .super_state
                .is_some_and(|id| graph.get(id).can_handle(trigger, graph))
    }

    /// Find the behaviour that handles `trigger`, searching this state first
    /// and then the super-state chain.
    pub(crate) fn try_find_handler<'g>(
        &'g self,
        trigger: &T,
        graph: &'g StateGraph<S, T>,
    ) -> Result<Option<&'g TriggerBehaviour<S, T>>> {
        if let Some(handler) = self.try_find_local_handler(trigger)? {
            return Ok(Some(handler));
        }
        match self.super_state {
            Some(id) => graph.get(id).try_find_handler(trigger, graph),
            None => Ok(None),
        }
    }

    fn try_find_local_handler(&self, trigger: &T) -> Result<Option<&TriggerBehaviour<S, T>>> {
        let Some(candidates) = self.trigger_behaviours.get(trigger) else {
            return Ok(None);
        };

        let mut result = None;
        for candidate in candidates.iter().filter(|c| c.is_condition_met()) {
            if result.is_some() {
                return Err(StateMachineError::AmbiguousGuards {
                    state: describe(&self.state),
                    trigger: describe(trigger),
                });
            }
            result = Some(candidate);
        }
        Ok(result)
    }

    /// Run entry actions for `transition`, entering ancestors first when the
    /// transition comes from outside this state's subtree.
    pub(crate) fn enter(
        &self,
        transition: &Transition<S, T>,
        args: FireArgs<'_>,
        graph: &StateGraph<S, T>,
    ) {
        if transition.is_reentry() {
            self.execute_entry_actions(transition, args);
        } else if !self.includes(transition.source(), graph) {
            if let Some(id) = self.super_state {
                graph.get(id).enter(transition, args, graph);
            }
            self.execute_entry_actions(transition, args);
        }
    }

    /// Run exit actions for `transition`, then exit ancestors when the
    /// destination lies outside this state's subtree.
    pub(crate) fn exit(&self, transition: &Transition<S, T>, graph: &StateGraph<S, T>) {
        if transition.is_reentry() {
            self.execute_exit_actions(transition);
        } else if !self.includes(transition.destination(), graph) {
            self.execute_exit_actions(transition);
            if let Some(id) = self.super_state {
                graph.get(id).exit(transition, graph);
            }
        }
    }

    /// True if `state` is this state or lies anywhere in its subtree.
    pub(crate) fn includes(&self, state: &S, graph: &StateGraph<S, T>) -> bool {
        *state == self.state
            || self
                .sub_states
                .iter()
                .any(|&id| graph.get(id).includes(state, graph))
    }

    /// True if `state` is this state or one of its ancestors.
    pub(crate) fn is_included_in(&self, state: &S, graph: &StateGraph<S, T>) -> bool {
        *state == self.state
            || self
                .super_state
                .is_some_and(|id| graph.get(id).is_included_in(state, graph))
    }

    /// Triggers with a currently passing guard here or in any ancestor.
    pub(crate) fn permitted_triggers(&self, graph: &StateGraph<S, T>) -> HashSet<T> {
        let mut triggers: HashSet<T> = self
            .trigger_behaviours
            .iter()
            .filter(|(_, candidates)| candidates.iter().any(|c| c.is_condition_met()))
            .map(|(trigger, _)| trigger.clone())
            .collect();
        if let Some(id) = self.super_state {
            triggers.extend(graph.get(id).permitted_triggers(graph));
        }
        triggers
    }

    fn execute_entry_actions(&self, transition: &Transition<S, T>, args: FireArgs<'_>) {
        trace!(state = ?self.state, actions = self.entry_actions.len(), "entering state");
        for action in &self.entry_actions {
            action.execute(transition, args);
        }
    }

    fn execute_exit_actions(&self, transition: &Transition<S, T>) {
        trace!(state = ?self.state, actions = self.exit_actions.len(), "exiting state");
        for action in &self.exit_actions {
            action.execute(transition);
        }
    }
}
