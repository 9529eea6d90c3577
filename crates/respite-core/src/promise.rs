//! Single-settle deferred values.
//!
//! The operation-source contract: a [`Promise`] settles at most once and may
//! never settle at all. Continuations run on the host thread, in registration
//! order, when (or immediately after) the promise settles; *when* that
//! happens is entirely up to whoever drives the event loop.

use std::cell::RefCell;
use std::rc::Rc;

type Continuation<T, E> = Box<dyn FnOnce(&Result<T, E>)>;

pub struct Promise<T, E>(Rc<RefCell<Inner<T, E>>>);

enum Inner<T, E> {
    Unsettled(Vec<Continuation<T, E>>),
    Settled(Result<T, E>),
}

impl<T: Clone + 'static, E: Clone + 'static> Promise<T, E> {
    pub fn pending() -> Self {
        Self(Rc::new(RefCell::new(Inner::Unsettled(Vec::new()))))
    }

    pub fn resolved(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner::Settled(Ok(value)))))
    }

    pub fn rejected(error: E) -> Self {
        Self(Rc::new(RefCell::new(Inner::Settled(Err(error)))))
    }

    pub fn resolve(&self, value: T) {
        self.settle(Ok(value));
    }

    pub fn reject(&self, error: E) {
        self.settle(Err(error));
    }

    pub fn is_settled(&self) -> bool {
        matches!(&*self.0.borrow(), Inner::Settled(_))
    }

    pub fn outcome(&self) -> Option<Result<T, E>> {
        match &*self.0.borrow() {
            Inner::Settled(outcome) => Some(outcome.clone()),
            Inner::Unsettled(_) => None,
        }
    }

    /// Registers `f` to run with the settled outcome; runs immediately if the
    /// promise already settled.
    pub fn on_settle(&self, f: impl FnOnce(&Result<T, E>) + 'static) {
        let outcome = {
            let mut inner = self.0.borrow_mut();
            match &mut *inner {
                Inner::Unsettled(waiters) => {
                    waiters.push(Box::new(f));
                    return;
                }
                Inner::Settled(outcome) => outcome.clone(),
            }
        };
        f(&outcome);
    }

    fn settle(&self, outcome: Result<T, E>) {
        if self.is_settled() {
            log::warn!("promise settled more than once; keeping the first outcome");
            return;
        }
        let prev = std::mem::replace(&mut *self.0.borrow_mut(), Inner::Settled(outcome.clone()));
        let Inner::Unsettled(waiters) = prev else {
            return;
        };
        // The borrow is released before continuations run, so they are free
        // to inspect the promise or dispatch into stores.
        for waiter in waiters {
            waiter(&outcome);
        }
    }
}

impl<T, E> Clone for Promise<T, E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
