//! Shared stores built on `respite-core`.
//!
//! Both stores here are meant to be handed to a view subtree through a
//! [`Providers`](respite_core::Providers) bag: one provider owns the store,
//! every consumer below it shares the same state and sees the same
//! notifications.

pub mod cache;
pub mod count;

pub use cache::*;
pub use count::*;
