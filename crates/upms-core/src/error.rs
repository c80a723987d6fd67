//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where instance data flows through them.

use thiserror::Error;

/// The error type for `upms-core` (instance loading and validation).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("instance parse error: {0}")]
    Parse(String),

    #[error("invalid instance: {0}")]
    Invalid(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `upms-core`.
pub type CoreResult<T> = Result<T, CoreError>;
