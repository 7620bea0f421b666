use crate::provider::ProviderError;
use crate::types::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("provider not found: {0}")]
    ProviderNotFound(String),
}

/// Input rejected before any backend call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty id")]
    EmptyId,

    #[error("empty text")]
    EmptyText,

    #[error("empty display")]
    EmptyDisplay,

    #[error("query too short: {len} chars, minimum is {min}")]
    QueryTooShort { len: usize, min: usize },

    #[error("limit exceeded: {limit} is above the maximum of {max}")]
    LimitExceeded { limit: usize, max: usize },
}
