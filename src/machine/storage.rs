//! Where the current state value lives.
//!
//! By default a machine owns its state. A host that keeps the state inside a
//! larger object can supply its own [`StateStorage`], or an accessor/mutator
//! pair through [`ExternalStorage`].

/// Read/write access to the current state of a machine.
pub trait StateStorage<S> {
    /// The current state.
    fn load(&self) -> S;

    /// Replace the current state.
    fn store(&mut self, state: S);
}

/// State owned by the machine itself.
#[derive(Debug, Clone)]
pub struct InternalStorage<S> {
    state: S,
}

impl<S> InternalStorage<S> {
    pub fn new(initial: S) -> Self {
        Self { state: initial }
    }
}

impl<S: Clone> StateStorage<S> for InternalStorage<S> {
    fn load(&self) -> S {
        self.state.clone()
    }

    fn store(&mut self, state: S) {
        self.state = state;
    }
}

/// State kept elsewhere, reached through an accessor and a mutator.
///
/// # Example
///
/// ```rust
/// use stateful::machine::{ExternalStorage, StateStorage};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let cell = Rc::new(Cell::new(1));
/// let mut storage = {
///     let (read, write) = (Rc::clone(&cell), Rc::clone(&cell));
///     ExternalStorage::new(move || read.get(), move |s| write.set(s))
/// };
///
/// storage.store(2);
/// assert_eq!(cell.get(), 2);
/// assert_eq!(storage.load(), 2);
/// ```
pub struct ExternalStorage<A, M> {
    accessor: A,
    mutator: M,
}

impl<A, M> ExternalStorage<A, M> {
    pub fn new(accessor: A, mutator: M) -> Self {
        Self { accessor, mutator }
    }
}

impl<S, A, M> StateStorage<S> for ExternalStorage<A, M>
where
    A: Fn() -> S,
    M: FnMut(S),
{
    fn load(&self) -> S {
        (self.accessor)()
    }

    fn store(&mut self, state: S) {
        (self.mutator)(state)
    }
}
