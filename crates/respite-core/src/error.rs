use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProvideError {
    #[error("no `{type_name}` provided; this view may only be used below a bag that provides one")]
    Missing { type_name: &'static str },
}
