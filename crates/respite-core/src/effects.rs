use std::cell::RefCell;
use std::rc::Rc;

use crate::scope::Scope;

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// A handle with nothing behind it.
    pub fn noop() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        if let Some(f) = self.0.borrow_mut().take() {
            f()
        }
    }
}

/// Helper to name the cleanup returned from [`Scope::effect`].
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}

impl Scope {
    /// Runs `setup` now; the `Dispose` it returns runs when this scope is
    /// torn down (or earlier, if the caller runs the returned handle itself).
    pub fn effect<F>(&self, setup: F) -> Dispose
    where
        F: FnOnce() -> Dispose,
    {
        let dispose = setup();
        let handle = dispose.clone();
        self.add_disposer(move || handle.run());
        dispose
    }
}
