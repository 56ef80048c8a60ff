//! Guarded rules mapping a trigger to a destination decision.

use crate::core::parameters::FireArgs;
use crate::core::{describe, Guard, Signature, State, Trigger};
use crate::error::{Result, StateMachineError};
use std::any::Any;
use std::fmt;

type DynamicDecision<S> = Box<dyn Fn(FireArgs<'_>) -> Option<S>>;

/// How a behaviour decides where the machine goes.
pub(crate) enum Decision<S> {
    /// Always transition to a destination chosen at configuration time.
    Fixed(S),

    /// Accept the trigger without any transition.
    Ignore,

    /// Compute the destination from the fire-time arguments.
    Dynamic {
        signature: Signature,
        decide: DynamicDecision<S>,
    },
}

impl<S: State> Decision<S> {
    pub(crate) fn dynamic<A, F>(decision: F) -> Self
    where
        A: Any,
        F: Fn(&A) -> S + 'static,
    {
        Decision::Dynamic {
            signature: Signature::of::<A>(),
            decide: Box::new(move |args: FireArgs<'_>| args.downcast::<A>().map(&decision)),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Decision<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Fixed(destination) => f.debug_tuple("Fixed").field(destination).finish(),
            Decision::Ignore => f.write_str("Ignore"),
            Decision::Dynamic { signature, .. } => f
                .debug_struct("Dynamic")
                .field("signature", &signature.name())
                .finish_non_exhaustive(),
        }
    }
}

/// A guarded rule for one trigger in one state.
#[derive(Debug)]
pub(crate) struct TriggerBehaviour<S, T> {
    trigger: T,
    guard: Guard,
    decision: Decision<S>,
}

impl<S: State, T: Trigger> TriggerBehaviour<S, T> {
    pub(crate) fn new(trigger: T, guard: Guard, decision: Decision<S>) -> Self {
        Self {
            trigger,
            guard,
            decision,
        }
    }

    pub(crate) fn trigger(&self) -> &T {
        &self.trigger
    }

    pub(crate) fn is_condition_met(&self) -> bool {
        self.guard.check()
    }

    /// The destination this behaviour leads to from `source`, or `None` when the
    /// trigger is absorbed without a transition.
    pub(crate) fn results_in_transition_from(
        &self,
        source: &S,
        args: FireArgs<'_>,
    ) -> Result<Option<S>> {
        match &self.decision {
            Decision::Fixed(destination) => Ok(Some(destination.clone())),
            Decision::Ignore => Ok(None),
            Decision::Dynamic { signature, decide } => {
                let mismatch = || StateMachineError::HandlerMismatch {
                    state: describe(source),
                    trigger: describe(&self.trigger),
                    expected: signature.name(),
                    actual: args.signature().name(),
                };
                if *signature != args.signature() {
                    return Err(mismatch());
                }
                decide(args).map(Some).ok_or_else(mismatch)
            }
        }
    }
}
