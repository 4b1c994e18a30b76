//! Store error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the store.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures that are raised to the caller.
///
/// Recoverable input problems are not errors at this level; they are reported
/// through [`InputError`] inside an operation outcome.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A query received an argument of the wrong kind (e.g. a non-text item).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing the persisted table failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table could not be serialized.
    #[error("failed to serialize stock table: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Input rejected by a mutating operation. The operation is skipped and the
/// table is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Item was empty or not text.
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// Quantity could not be coerced to an integer.
    #[error("non-integer quantity: {0}")]
    InvalidQuantity(String),

    /// Threshold could not be coerced to an integer.
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),
}
