//! Ownership and teardown for a mounted view subtree.
//!
//! A [`Scope`] collects cleanup closures and child scopes; disposing it (or
//! dropping the last handle) tears the whole subtree down, children first.
//! Scopes are passed explicitly through the call tree rather than kept in
//! ambient thread-local state, so every consumer of a lifecycle is visible at
//! the call site.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

type Disposer = Box<dyn FnOnce()>;

pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    alive: Cell<bool>,
    disposers: RefCell<SmallVec<[Disposer; 4]>>,
    children: RefCell<Vec<Scope>>,
}

/// Read-only view of a scope's alive bit.
///
/// Up from the scope's creation until its teardown begins; down afterwards on
/// every path, including plain drop. Consulted by
/// [`SafeDispatch`](crate::SafeDispatch), never written through.
#[derive(Clone)]
pub struct Liveness(Weak<ScopeInner>);

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.upgrade().is_some_and(|scope| scope.alive.get())
    }
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                alive: Cell::new(true),
                disposers: RefCell::new(SmallVec::new()),
                children: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.get()
    }

    pub fn liveness(&self) -> Liveness {
        Liveness(Rc::downgrade(&self.inner))
    }

    /// Registers cleanup to run at teardown. On a scope that is already dead
    /// the closure runs immediately.
    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        if !self.inner.alive.get() {
            disposer();
            return;
        }
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    /// Child scope, torn down before this scope's own disposers run.
    pub fn child(&self) -> Scope {
        let child = Scope::new();
        self.inner.children.borrow_mut().push(child.clone());
        child
    }

    pub fn dispose(self) {
        self.inner.teardown();
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeInner {
    fn teardown(&self) {
        // Flip the alive bit before anything else so no disposer (or late
        // callback it triggers) can observe a live scope mid-teardown.
        if !self.alive.replace(false) {
            return;
        }

        let children = std::mem::take(&mut *self.children.borrow_mut());
        for child in children {
            child.inner.teardown();
        }

        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for dispose in disposers {
            dispose();
        }
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        self.teardown();
    }
}
