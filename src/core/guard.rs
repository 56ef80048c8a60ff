//! Guard predicates for controlling state transitions.
//!
//! Guards are zero-argument boolean functions evaluated every time the
//! behaviour that owns them is considered. They may read any external state
//! the closure captures, so the same guard can answer differently between fires.

use std::fmt;

/// Predicate that determines if a trigger behaviour applies right now.
///
/// # Example
///
/// ```rust
/// use stateful::core::Guard;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let open = Rc::new(Cell::new(false));
/// let guard = {
///     let open = Rc::clone(&open);
///     Guard::new(move || open.get())
/// };
///
/// assert!(!guard.check());
/// open.set(true);
/// assert!(guard.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool>,
}

impl Guard {
    /// Create a guard from a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that always passes.
    pub fn always() -> Self {
        Guard::new(|| true)
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::always()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn always_passes() {
        assert!(Guard::always().check());
        assert!(Guard::default().check());
    }

    #[test]
    fn guard_reflects_captured_state() {
        let flag = Rc::new(Cell::new(true));
        let guard = {
            let flag = Rc::clone(&flag);
            Guard::new(move || flag.get())
        };

        assert!(guard.check());
        flag.set(false);
        assert!(!guard.check());
    }

    #[test]
    fn guard_is_reevaluated_on_every_check() {
        let calls = Rc::new(Cell::new(0));
        let guard = {
            let calls = Rc::clone(&calls);
            Guard::new(move || {
                calls.set(calls.get() + 1);
                true
            })
        };

        guard.check();
        guard.check();
        assert_eq!(calls.get(), 2);
    }
}
