//! Triggers bound to a declared argument type.
//!
//! A trigger that carries data when fired is registered once per machine with
//! the type of its argument (a tuple for several values). The returned
//! [`TriggerWithParameters`] token is what callers pass to `fire_with` and to the
//! parameterized builder methods, so the argument type is checked by the compiler
//! wherever a token is used and by the registry wherever a bare trigger is.

use super::state::{describe, Trigger};
use crate::error::{Result, StateMachineError};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Runtime identity of an argument type.
#[derive(Clone, Copy, Debug)]
pub struct Signature {
    id: TypeId,
    name: &'static str,
}

impl Signature {
    /// The signature of values of type `A`.
    pub fn of<A: Any>() -> Self {
        Self {
            id: TypeId::of::<A>(),
            name: type_name::<A>(),
        }
    }

    /// The signature of a fire without arguments.
    pub fn none() -> Self {
        Self::of::<()>()
    }

    /// Human readable type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True for the signature of argument-less fires.
    pub fn is_none(&self) -> bool {
        self.id == TypeId::of::<()>()
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Signature {}

/// Arguments supplied to a single fire, erased to `&dyn Any`.
#[derive(Clone, Copy)]
pub(crate) struct FireArgs<'a> {
    value: &'a dyn Any,
    signature: Signature,
}

impl<'a> FireArgs<'a> {
    pub(crate) fn none() -> FireArgs<'static> {
        FireArgs {
            value: &(),
            signature: Signature::none(),
        }
    }

    pub(crate) fn of<A: Any>(value: &'a A) -> Self {
        FireArgs {
            value,
            signature: Signature::of::<A>(),
        }
    }

    pub(crate) fn signature(&self) -> Signature {
        self.signature
    }

    pub(crate) fn downcast<A: Any>(&self) -> Option<&'a A> {
        self.value.downcast_ref::<A>()
    }
}

impl fmt::Debug for FireArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FireArgs")
            .field("signature", &self.signature.name)
            .finish()
    }
}

/// A trigger value together with the type of argument it must be fired with.
///
/// Tokens are created by `StateMachine::set_trigger_parameters`.
pub struct TriggerWithParameters<T, A> {
    trigger: T,
    _args: PhantomData<fn(A)>,
}

impl<T: Trigger, A: Any> TriggerWithParameters<T, A> {
    pub(crate) fn new(trigger: T) -> Self {
        Self {
            trigger,
            _args: PhantomData,
        }
    }

    /// The underlying trigger value.
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    /// The argument signature this trigger is fired with.
    pub fn signature(&self) -> Signature {
        Signature::of::<A>()
    }
}

impl<T: Clone, A> Clone for TriggerWithParameters<T, A> {
    fn clone(&self) -> Self {
        Self {
            trigger: self.trigger.clone(),
            _args: PhantomData,
        }
    }
}

impl<T: fmt::Debug, A> fmt::Debug for TriggerWithParameters<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerWithParameters")
            .field("trigger", &self.trigger)
            .field("args", &type_name::<A>())
            .finish()
    }
}

/// Per-machine mapping from trigger value to its registered argument signature.
#[derive(Debug)]
pub(crate) struct TriggerRegistry<T> {
    signatures: HashMap<T, Signature>,
}

impl<T: Trigger> TriggerRegistry<T> {
    pub(crate) fn new() -> Self {
        Self {
            signatures: HashMap::new(),
        }
    }

    /// Register `trigger` as taking arguments of type `A`. Registration is permanent.
    pub(crate) fn register<A: Any>(&mut self, trigger: T) -> Result<TriggerWithParameters<T, A>> {
        if self.signatures.contains_key(&trigger) {
            return Err(StateMachineError::TriggerParametersAlreadySet {
                trigger: describe(&trigger),
            });
        }
        self.signatures.insert(trigger.clone(), Signature::of::<A>());
        Ok(TriggerWithParameters::new(trigger))
    }

    pub(crate) fn signature(&self, trigger: &T) -> Option<Signature> {
        self.signatures.get(trigger).copied()
    }

    /// Check fire-time arguments against the registered signature, if any.
    pub(crate) fn verify(&self, trigger: &T, actual: Signature) -> Result<()> {
        match self.signature(trigger) {
            Some(expected) if expected != actual => Err(StateMachineError::ParameterMismatch {
                trigger: describe(trigger),
                expected: expected.name(),
                actual: actual.name(),
            }),
            _ => Ok(()),
        }
    }

    /// Check that a token was issued by this registry for the same signature.
    pub(crate) fn verify_token<A: Any>(&self, token: &TriggerWithParameters<T, A>) -> Result<()> {
        match self.signature(token.trigger()) {
            Some(registered) if registered == token.signature() => Ok(()),
            _ => Err(StateMachineError::UnregisteredTrigger {
                trigger: describe(token.trigger()),
                expected: token.signature().name(),
            }),
        }
    }
}
