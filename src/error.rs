//! Error types for FlashTTL.
//!
//! A missing key is not an error: lookups return `Option`. Errors are reserved
//! for misuse of the API.

use thiserror::Error;

/// Errors returned by cache construction, `set` and `close`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A duration or size argument is out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `close` was called on a cache that is already closed
    #[error("cache is already closed")]
    AlreadyClosed,

    /// The expiry sweeper needs a Tokio runtime to run on
    #[error("no tokio runtime available to run the expiry sweeper")]
    NoRuntime,
}

impl CacheError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CacheError::InvalidArgument(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
