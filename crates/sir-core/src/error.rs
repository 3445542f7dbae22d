//! Simulator error type.
//!
//! Sub-crates may define their own error enums and convert `SirError` into
//! them via `From` impls (as `sir-sim` does), or return `SirError` directly.

use thiserror::Error;

/// The top-level error type for `sir-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SirError {
    /// A parameter is out of range.  Raised at configuration time, never
    /// mid-run.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Simulation state is corrupt (a logic fault, not a recoverable
    /// condition).  The run must be aborted.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl SirError {
    /// Shorthand for building an [`SirError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        SirError::InvalidArgument(msg.into())
    }
}

/// Shorthand result type for all `sir-*` crates.
pub type SirResult<T> = Result<T, SirError>;
