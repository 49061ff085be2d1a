//! Domain error types
//!
//! Callers pattern-match on these instead of inspecting storage errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// No record matched the requested id or term
    #[error("{0}")]
    NotFound(String),
    /// The storage layer rejected a write on a unique column
    #[error("{0}")]
    Conflict(String),
    /// Anything else. Details go to the logs, never to the caller.
    #[error("Unexpected error, check server logs")]
    Internal,
}

impl ProductError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
