//! Error types for application transitions and parsing.

use thiserror::Error;

/// Errors returned while changing application status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationDomainError {
    /// The requested status cannot be reached from the current status.
    #[error("invalid application status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// Current status.
        from: String,
        /// Requested status.
        to: String,
    },
}

/// Error returned while parsing an application status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown application status: {0}")]
pub struct ParseApplicationStatusError(pub String);
