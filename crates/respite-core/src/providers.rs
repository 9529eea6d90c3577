//! Explicit dependency injection.
//!
//! Shared stores reach a view subtree through a [`Providers`] bag passed down
//! by reference, never through a hidden singleton. A bag is a type-keyed map:
//! provide one value per concrete type, look it up by that type further down
//! the tree. [`Providers::overlay`] starts a child bag whose later `provide`
//! calls shadow the parent's entries, innermost wins.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ProvideError;

#[derive(Clone, Default)]
pub struct Providers {
    entries: HashMap<TypeId, Rc<dyn Any>>,
}

impl Providers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provide<T: 'static>(mut self, value: T) -> Self {
        self.entries.insert(TypeId::of::<T>(), Rc::new(value));
        self
    }

    pub fn try_get<T: 'static>(&self) -> Option<Rc<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|any| any.downcast::<T>().ok())
    }

    /// Errors (rather than panics) when nothing upstream provided a `T`, so a
    /// view mounted outside its provider reports a useful message.
    pub fn get<T: 'static>(&self) -> Result<Rc<T>, ProvideError> {
        self.try_get::<T>().ok_or(ProvideError::Missing {
            type_name: type_name::<T>(),
        })
    }

    /// Child bag for a subtree: starts with this bag's entries; `provide`
    /// calls on the child shadow without touching the parent.
    pub fn overlay(&self) -> Self {
        self.clone()
    }
}
