//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls where a core operation (config loading) can fail inside
//! theirs.

use thiserror::Error;

/// The top-level error type for `er-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `er-core`.
pub type CoreResult<T> = Result<T, CoreError>;
