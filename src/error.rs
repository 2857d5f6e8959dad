//! Error types for the decorator
//!
//! Each layer owns a `thiserror` enum; `DecoratorError` folds them together
//! for callers (the CLI, embedding hosts) that want a single type.

use thiserror::Error;

use crate::application::DispatchError;
use crate::domain::ports::{DecodeError, StoreError};
use crate::domain::value_objects::InputError;
use crate::infrastructure::properties::PropertiesError;

/// Result type alias for decorator operations
pub type DecoratorResult<T> = Result<T, DecoratorError>;

/// Main error type for decorator operations
#[derive(Error, Debug)]
pub enum DecoratorError {
    /// Persisted endpoint file could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Endpoint input did not follow `endpoint?key=value&...`
    #[error(transparent)]
    Input(#[from] InputError),

    /// Client construction or payload decoding failed
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Properties text could not be parsed
    #[error(transparent)]
    Properties(#[from] PropertiesError),

    /// UI dispatcher no longer accepts tasks
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
