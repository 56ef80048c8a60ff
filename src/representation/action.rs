//! Entry and exit actions attached to a state.
//!
//! Entry actions come in two shapes: plain actions that only see the
//! transition, and parameterized actions that also receive the fire-time
//! arguments. Each carries its argument signature so dispatch can skip the
//! actions that do not fit the arguments of the current fire.

use crate::core::parameters::FireArgs;
use crate::core::{Signature, State, Transition, Trigger};
use std::any::Any;
use std::fmt;
use tracing::trace;

type PlainAction<S, T> = Box<dyn Fn(&Transition<S, T>)>;
type ParameterizedAction<S, T> = Box<dyn Fn(&Transition<S, T>, FireArgs<'_>) -> bool>;

enum EntryKind<S, T> {
    Plain(PlainAction<S, T>),
    Parameterized {
        signature: Signature,
        action: ParameterizedAction<S, T>,
    },
}

/// An action run when a state is entered.
pub(crate) struct EntryAction<S, T> {
    /// Only run when entered through this trigger.
    trigger: Option<T>,
    kind: EntryKind<S, T>,
}

impl<S: State, T: Trigger> EntryAction<S, T> {
    pub(crate) fn plain<F>(trigger: Option<T>, action: F) -> Self
    where
        F: Fn(&Transition<S, T>) + 'static,
    {
        Self {
            trigger,
            kind: EntryKind::Plain(Box::new(action)),
        }
    }

    pub(crate) fn parameterized<A, F>(trigger: Option<T>, action: F) -> Self
    where
        A: Any,
        F: Fn(&Transition<S, T>, &A) + 'static,
    {
        let action = move |transition: &Transition<S, T>, args: FireArgs<'_>| {
            let Some(args) = args.downcast::<A>() else {
                return false;
            };
            action(transition, args);
            true
        };
        Self {
            trigger,
            kind: EntryKind::Parameterized {
                signature: Signature::of::<A>(),
                action: Box::new(action),
            },
        }
    }

    /// Run the action if its trigger filter and signature fit this fire.
    /// Returns whether it ran.
    pub(crate) fn execute(&self, transition: &Transition<S, T>, args: FireArgs<'_>) -> bool {
        if let Some(trigger) = &self.trigger {
            if trigger != transition.trigger() {
                return false;
            }
        }
        match &self.kind {
            EntryKind::Plain(action) => {
                action(transition);
                true
            }
            EntryKind::Parameterized { signature, action } => {
                if *signature != args.signature() {
                    trace!(
                        expected = signature.name(),
                        actual = args.signature().name(),
                        "skipping entry action with other parameters"
                    );
                    return false;
                }
                action(transition, args)
            }
        }
    }
}

impl<S, T> EntryAction<S, T> {
    /// Argument signature, `None` for plain actions.
    fn signature(&self) -> Option<Signature> {
        match &self.kind {
            EntryKind::Plain(_) => None,
            EntryKind::Parameterized { signature, .. } => Some(*signature),
        }
    }
}

impl<S, T: fmt::Debug> fmt::Debug for EntryAction<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryAction")
            .field("trigger", &self.trigger)
            .field("signature", &self.signature().map(|s| s.name()))
            .finish_non_exhaustive()
    }
}

/// An action run when a state is exited.
pub(crate) struct ExitAction<S, T> {
    action: PlainAction<S, T>,
}

impl<S: State, T: Trigger> ExitAction<S, T> {
    pub(crate) fn new<F>(action: F) -> Self
    where
        F: Fn(&Transition<S, T>) + 'static,
    {
        Self {
            action: Box::new(action),
        }
    }

    pub(crate) fn execute(&self, transition: &Transition<S, T>) {
        (self.action)(transition)
    }
}

impl<S, T> fmt::Debug for ExitAction<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitAction").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;
    type Tr = Transition<&'static str, char>;

    fn transition(trigger: char) -> Tr {
        Transition::new("A", "B", trigger)
    }

    #[test]
    fn plain_action_runs_for_any_arguments() {
        let log: Log = Rc::default();
        let action = {
            let log = Rc::clone(&log);
            EntryAction::plain(None, move |t: &Tr| {
                log.borrow_mut().push(format!("{}", t.trigger()))
            })
        };

        assert!(action.execute(&transition('x'), FireArgs::none()));
        assert!(action.execute(&transition('y'), FireArgs::of(&5)));
        assert_eq!(*log.borrow(), vec!["x", "y"]);
    }

    #[test]
    fn filtered_action_only_runs_for_its_trigger() {
        let log: Log = Rc::default();
        let action = {
            let log = Rc::clone(&log);
            EntryAction::plain(Some('x'), move |_: &Tr| {
                log.borrow_mut().push("ran".into())
            })
        };

        assert!(!action.execute(&transition('y'), FireArgs::none()));
        assert!(action.execute(&transition('x'), FireArgs::none()));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn parameterized_action_receives_arguments() {
        let log: Log = Rc::default();
        let action = {
            let log = Rc::clone(&log);
            EntryAction::parameterized(None, move |_: &Tr, args: &(String, i32)| {
                log.borrow_mut().push(format!("{}:{}", args.0, args.1))
            })
        };

        let args = (String::from("something"), 42);
        assert!(action.execute(&transition('x'), FireArgs::of(&args)));
        assert_eq!(*log.borrow(), vec!["something:42"]);
        assert_eq!(action.signature(), Some(Signature::of::<(String, i32)>()));
    }

    #[test]
    fn parameterized_action_is_skipped_for_other_arguments() {
        let log: Log = Rc::default();
        let action = {
            let log = Rc::clone(&log);
            EntryAction::parameterized(None, move |_: &Tr, _: &String| {
                log.borrow_mut().push("ran".into())
            })
        };

        assert!(!action.execute(&transition('x'), FireArgs::none()));
        assert!(!action.execute(&transition('x'), FireArgs::of(&1u8)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn exit_action_runs() {
        let log: Log = Rc::default();
        let action = {
            let log = Rc::clone(&log);
            ExitAction::new(move |t: &Tr| {
                log.borrow_mut().push(t.source().to_string())
            })
        };

        action.execute(&transition('x'));
        assert_eq!(*log.borrow(), vec!["A"]);
    }
}
