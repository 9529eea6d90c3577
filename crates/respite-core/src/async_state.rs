//! The lifecycle of a single in-flight asynchronous operation.
//!
//! An [`AsyncResource`] tracks one logical operation through
//! `Idle → Pending → Resolved | Rejected`, mutating its state only through a
//! [`SafeDispatch`] bound to the owning scope. Re-running restarts the machine
//! at `Pending`; a settlement that arrives after the scope's teardown is
//! dropped by the guard rather than cancelled at the source.
//!
//! Overlapping `run` calls are deliberately racy: each settle lands in arrival
//! order and the last one wins, whatever the invocation order was. The guard
//! is the only neutralizer for stale completions.

use std::fmt;
use std::marker::PhantomData;

use crate::dispatch::SafeDispatch;
use crate::effects::Dispose;
use crate::promise::Promise;
use crate::scope::Scope;
use crate::signal::SubKey;
use crate::state::{StateHolder, Store};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AsyncState<T, E> {
    Idle,
    Pending,
    Resolved(T),
    Rejected(E),
}

impl<T, E> Default for AsyncState<T, E> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Payload-free view of an [`AsyncState`], for rendering matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Pending,
    Resolved,
    Rejected,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Idle => "idle",
            Status::Pending => "pending",
            Status::Resolved => "resolved",
            Status::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

impl<T, E> AsyncState<T, E> {
    pub fn status(&self) -> Status {
        match self {
            AsyncState::Idle => Status::Idle,
            AsyncState::Pending => Status::Pending,
            AsyncState::Resolved(_) => Status::Resolved,
            AsyncState::Rejected(_) => Status::Rejected,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            AsyncState::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            AsyncState::Rejected(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, AsyncState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncState::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, AsyncState::Resolved(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, AsyncState::Rejected(_))
    }
}

pub enum AsyncAction<T, E> {
    /// An operation started; clears any previous outcome.
    Begin,
    Resolve(T),
    Reject(E),
    /// Synthetic immediate resolution with no prior `Pending` (cache hits).
    Set(T),
}

impl<T, E> AsyncAction<T, E> {
    pub fn kind(&self) -> &'static str {
        match self {
            AsyncAction::Begin => "begin",
            AsyncAction::Resolve(_) => "resolve",
            AsyncAction::Reject(_) => "reject",
            AsyncAction::Set(_) => "set",
        }
    }
}

pub struct AsyncReducer<T, E>(PhantomData<(T, E)>);

impl<T: Clone + 'static, E: Clone + 'static> StateHolder for AsyncReducer<T, E> {
    type State = AsyncState<T, E>;
    type Event = AsyncAction<T, E>;

    fn initial_state() -> Self::State {
        AsyncState::Idle
    }

    fn reduce(state: &Self::State, event: Self::Event) -> Self::State {
        use AsyncAction as A;
        use AsyncState as S;
        match (state, event) {
            (_, A::Begin) => S::Pending,
            (_, A::Set(value)) => S::Resolved(value),
            // A settle with no run behind it is a programming error, not an
            // operation failure.
            (S::Idle, action @ (A::Resolve(_) | A::Reject(_))) => {
                panic!(
                    "unhandled action `{}` in state `{}`",
                    action.kind(),
                    state.status()
                )
            }
            // Settling an already settled machine is the overlapping-run
            // race: the later arrival wins.
            (_, A::Resolve(value)) => S::Resolved(value),
            (_, A::Reject(error)) => S::Rejected(error),
        }
    }
}

/// Reducer store for one async operation, with every write guarded by the
/// owning scope's liveness.
pub struct AsyncResource<T: Clone + 'static, E: Clone + 'static> {
    store: Store<AsyncReducer<T, E>>,
    dispatch: SafeDispatch<AsyncAction<T, E>>,
}

impl<T: Clone + 'static, E: Clone + 'static> AsyncResource<T, E> {
    pub fn new(scope: &Scope) -> Self {
        Self::with_initial(scope, AsyncState::Idle)
    }

    /// Callers that mount with a request already in hand start at
    /// [`AsyncState::Pending`] instead of `Idle`.
    pub fn with_initial(scope: &Scope, initial: AsyncState<T, E>) -> Self {
        let store = Store::with_state(initial);
        let dispatch = SafeDispatch::new(store.dispatcher(), scope.liveness());
        Self { store, dispatch }
    }

    /// Starts `operation`: `Pending` is observable before this returns; the
    /// settlement lands through the guard whenever the host loop delivers it.
    ///
    /// The returned handle exists so a caller can hang cleanup off the run;
    /// it does not cancel the operation; a stale settle is neutralized by
    /// the liveness guard alone.
    pub fn run(&self, operation: &Promise<T, E>) -> Dispose {
        self.dispatch.dispatch(AsyncAction::Begin);
        let dispatch = self.dispatch.clone();
        operation.on_settle(move |outcome| match outcome {
            Ok(value) => dispatch.dispatch(AsyncAction::Resolve(value.clone())),
            Err(error) => dispatch.dispatch(AsyncAction::Reject(error.clone())),
        });
        Dispose::noop()
    }

    /// Imperative resolution, bypassing the pending cycle.
    pub fn set_data(&self, value: T) {
        self.dispatch.dispatch(AsyncAction::Set(value));
    }

    pub fn state(&self) -> AsyncState<T, E> {
        self.store.state()
    }

    pub fn status(&self) -> Status {
        self.store.signal().with(|state| state.status())
    }

    pub fn subscribe(&self, f: impl Fn(&AsyncState<T, E>) + 'static) -> SubKey {
        self.store.subscribe(f)
    }

    pub fn unsubscribe(&self, key: SubKey) {
        self.store.unsubscribe(key);
    }

    /// The guarded dispatch itself; clones share its identity, so it is safe
    /// to hand to memoized consumers.
    pub fn dispatcher(&self) -> &SafeDispatch<AsyncAction<T, E>> {
        &self.dispatch
    }
}

impl<T: Clone + 'static, E: Clone + 'static> Clone for AsyncResource<T, E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            dispatch: self.dispatch.clone(),
        }
    }
}
