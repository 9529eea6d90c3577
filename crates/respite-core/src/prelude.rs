pub use crate::async_state::{
    AsyncAction, AsyncReducer, AsyncResource, AsyncState, Status,
};
pub use crate::dispatch::SafeDispatch;
pub use crate::effects::{Dispose, on_unmount};
pub use crate::error::ProvideError;
pub use crate::promise::Promise;
pub use crate::providers::Providers;
pub use crate::scope::{Liveness, Scope};
pub use crate::signal::{Signal, SubKey, signal};
pub use crate::state::{StateHolder, Store};
