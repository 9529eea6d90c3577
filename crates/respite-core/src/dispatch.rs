//! Guarded dispatch.
//!
//! A [`SafeDispatch`] forwards actions to a raw dispatcher only while the
//! owning scope is alive. An action arriving after teardown (typically the
//! settlement of an operation the view no longer cares about) is dropped
//! silently: there is nothing left to observe the transition, so it is not an
//! error.

use std::rc::Rc;

use crate::scope::Liveness;

pub struct SafeDispatch<A> {
    raw: Rc<dyn Fn(A)>,
    liveness: Liveness,
}

impl<A> SafeDispatch<A> {
    pub fn new(raw: Rc<dyn Fn(A)>, liveness: Liveness) -> Self {
        Self { raw, liveness }
    }

    /// Forwards `action` iff the liveness flag is up at call time.
    pub fn dispatch(&self, action: A) {
        if self.liveness.is_alive() {
            (self.raw)(action);
        } else {
            log::trace!("dispatch after teardown; action dropped");
        }
    }

    /// Whether two handles forward to the same underlying dispatcher.
    /// Clones always do, so a clone can stand in for the original in any
    /// memoized consumer.
    pub fn same_dispatcher(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.raw, &other.raw)
    }
}

impl<A> Clone for SafeDispatch<A> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            liveness: self.liveness.clone(),
        }
    }
}
