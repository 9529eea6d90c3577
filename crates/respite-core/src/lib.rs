//! # Signals, scopes, and guarded async state
//!
//! Respite's core is a small set of lifecycle-aware state primitives:
//!
//! - `Signal<T>` — observable value with explicit subscriptions.
//! - `Scope` / `Liveness` — teardown ownership and the alive bit it exposes.
//! - `SafeDispatch` — a dispatch entry point that goes quiet after teardown.
//! - `Store<H>` — reducer-driven state behind a signal.
//! - `Promise<T, E>` / `AsyncResource<T, E>` — single-settle operations and
//!   the `Idle → Pending → Resolved | Rejected` machine tracking them.
//! - `Providers` — explicit, type-keyed dependency injection.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state; writes notify
//! subscribers:
//!
//! ```rust
//! use respite_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Async resources
//!
//! An `AsyncResource` is bound to the scope that owns the view. `run` marks
//! the machine pending before it returns; the settlement arrives whenever the
//! host loop delivers it:
//!
//! ```rust
//! use respite_core::*;
//!
//! let scope = Scope::new();
//! let lookup = AsyncResource::<String, String>::new(&scope);
//!
//! let op = Promise::pending();
//! lookup.run(&op);
//! assert_eq!(lookup.state(), AsyncState::Pending);
//!
//! op.resolve("hit".to_string());
//! assert_eq!(lookup.state(), AsyncState::Resolved("hit".to_string()));
//! ```
//!
//! ## Teardown
//!
//! Once the owning scope is disposed, late settlements are dropped by the
//! guard instead of mutating state nothing will observe:
//!
//! ```rust
//! use respite_core::*;
//!
//! let scope = Scope::new();
//! let lookup = AsyncResource::<u32, String>::new(&scope);
//!
//! let op = Promise::pending();
//! lookup.run(&op);
//! scope.dispose();
//!
//! op.resolve(7); // arrives late; silently discarded
//! assert_eq!(lookup.state(), AsyncState::Pending);
//! ```
//!
//! For cleanup tied to a view's lifetime, use `Scope::effect`:
//!
//! ```rust
//! use respite_core::*;
//!
//! let scope = Scope::new();
//! scope.effect(|| {
//!     log::info!("mounted");
//!     on_unmount(|| log::info!("unmounted"))
//! });
//! scope.dispose();
//! ```

pub mod async_state;
pub mod dispatch;
pub mod effects;
pub mod error;
pub mod prelude;
pub mod promise;
pub mod providers;
pub mod scope;
pub mod signal;
pub mod state;
pub mod tests;

pub use async_state::*;
pub use dispatch::*;
pub use effects::*;
pub use error::*;
pub use prelude::*;
pub use promise::*;
pub use providers::*;
pub use scope::*;
pub use signal::*;
pub use state::*;
