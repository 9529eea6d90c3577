use std::rc::Rc;

use crate::signal::{Signal, SubKey, signal};

// State holder pattern
pub trait StateHolder: 'static {
    type State: Clone + 'static;
    type Event;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, event: Self::Event) -> Self::State;
}

/// A reducer-driven store: a [`Signal`] whose writes all go through
/// [`StateHolder::reduce`].
pub struct Store<H: StateHolder> {
    state: Signal<H::State>,
}

impl<H: StateHolder> Store<H> {
    pub fn new() -> Self {
        Self::with_state(H::initial_state())
    }

    pub fn with_state(initial: H::State) -> Self {
        Self {
            state: signal(initial),
        }
    }

    pub fn dispatch(&self, event: H::Event) {
        let next = self.state.with(|state| H::reduce(state, event));
        self.state.set(next);
    }

    /// The raw dispatch entry point, suitable for wrapping in a
    /// [`SafeDispatch`](crate::SafeDispatch).
    pub fn dispatcher(&self) -> Rc<dyn Fn(H::Event)> {
        let state = self.state.clone();
        Rc::new(move |event| {
            let next = state.with(|current| H::reduce(current, event));
            state.set(next);
        })
    }

    pub fn state(&self) -> H::State {
        self.state.get()
    }

    pub fn signal(&self) -> &Signal<H::State> {
        &self.state
    }

    pub fn subscribe(&self, f: impl Fn(&H::State) + 'static) -> SubKey {
        self.state.subscribe(f)
    }

    pub fn unsubscribe(&self, key: SubKey) {
        self.state.unsubscribe(key);
    }
}

impl<H: StateHolder> Clone for Store<H> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<H: StateHolder> Default for Store<H> {
    fn default() -> Self {
        Self::new()
    }
}
