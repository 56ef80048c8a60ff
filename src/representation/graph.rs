//! Arena owning every state representation of a machine.

use super::state::StateRepresentation;
use crate::core::{describe, State, Trigger};
use crate::error::{Result, StateMachineError};
use std::collections::HashMap;

/// Stable index of a representation inside a `StateGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StateId(usize);

/// One representation per distinct state value, created on first reference
/// and kept for the lifetime of the machine.
#[derive(Debug)]
pub(crate) struct StateGraph<S, T> {
    nodes: Vec<StateRepresentation<S, T>>,
    index: HashMap<S, StateId>,
}

impl<S: State, T: Trigger> StateGraph<S, T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn id(&self, state: &S) -> Option<StateId> {
        self.index.get(state).copied()
    }

    /// Look up the representation of `state`, creating it if needed.
    pub(crate) fn id_or_insert(&mut self, state: S) -> StateId {
        if let Some(id) = self.id(&state) {
            return id;
        }
        let id = StateId(self.nodes.len());
        self.nodes.push(StateRepresentation::new(state.clone()));
        self.index.insert(state, id);
        id
    }

    // Ids are only handed out by this graph and nodes are never removed.
    pub(crate) fn get(&self, id: StateId) -> &StateRepresentation<S, T> {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: StateId) -> &mut StateRepresentation<S, T> {
        &mut self.nodes[id.0]
    }

    pub(crate) fn find(&self, state: &S) -> Option<&StateRepresentation<S, T>> {
        self.id(state).map(|id| self.get(id))
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Make `sub` a sub-state of `parent`, linking both directions.
    pub(crate) fn link(&mut self, sub: StateId, parent: StateId) -> Result<()> {
        let parent_state = self.get(parent).underlying_state();
        if self.get(sub).includes(parent_state, self) {
            return Err(StateMachineError::CyclicHierarchy {
                state: describe(self.get(sub).underlying_state()),
                super_state: describe(parent_state),
            });
        }

        match self.get(sub).super_state() {
            Some(existing) if existing == parent => return Ok(()),
            Some(existing) => {
                return Err(StateMachineError::SuperStateConflict {
                    state: describe(self.get(sub).underlying_state()),
                    existing: describe(self.get(existing).underlying_state()),
                    requested: describe(parent_state),
                })
            }
            None => {}
        }

        self.get_mut(sub).set_super_state(parent);
        self.get_mut(parent).add_sub_state(sub);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Graph = StateGraph<&'static str, char>;

    #[test]
    fn states_are_created_once() {
        let mut graph = Graph::new();
        let first = graph.id_or_insert("A");
        let again = graph.id_or_insert("A");
        let other = graph.id_or_insert("B");

        assert_eq!(first, again);
        assert_ne!(first, other);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.get(first).underlying_state(), &"A");
    }

    #[test]
    fn lookup_does_not_create() {
        let mut graph = Graph::new();
        graph.id_or_insert("A");

        assert!(graph.find(&"A").is_some());
        assert!(graph.find(&"B").is_none());
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn link_records_both_directions() {
        let mut graph = Graph::new();
        let parent = graph.id_or_insert("Parent");
        let child = graph.id_or_insert("Child");
        graph.link(child, parent).unwrap();

        assert_eq!(graph.get(child).super_state(), Some(parent));
        assert!(graph.get(parent).includes(&"Child", &graph));
    }

    #[test]
    fn relinking_same_parent_is_a_no_op() {
        let mut graph = Graph::new();
        let parent = graph.id_or_insert("Parent");
        let child = graph.id_or_insert("Child");
        graph.link(child, parent).unwrap();
        graph.link(child, parent).unwrap();

        assert_eq!(graph.get(child).super_state(), Some(parent));
    }

    #[test]
    fn linking_to_a_second_parent_fails() {
        let mut graph = Graph::new();
        let first = graph.id_or_insert("First");
        let second = graph.id_or_insert("Second");
        let child = graph.id_or_insert("Child");
        graph.link(child, first).unwrap();

        let err = graph.link(child, second).unwrap_err();
        assert!(matches!(err, StateMachineError::SuperStateConflict { .. }));
    }

    #[test]
    fn self_parenting_is_rejected() {
        let mut graph = Graph::new();
        let a = graph.id_or_insert("A");

        let err = graph.link(a, a).unwrap_err();
        assert!(matches!(err, StateMachineError::CyclicHierarchy { .. }));
    }

    #[test]
    fn cycles_through_descendants_are_rejected() {
        let mut graph = Graph::new();
        let a = graph.id_or_insert("A");
        let b = graph.id_or_insert("B");
        let c = graph.id_or_insert("C");
        graph.link(b, a).unwrap();
        graph.link(c, b).unwrap();

        let err = graph.link(a, c).unwrap_err();
        assert_eq!(
            err,
            StateMachineError::CyclicHierarchy {
                state: "\"A\"".into(),
                super_state: "\"C\"".into()
            }
        );
    }
}
