//! Error types for task validation, transitions, and parsing.

use thiserror::Error;

/// Errors returned while creating or progressing tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The submission link is empty after trimming.
    #[error("submission link must not be empty")]
    EmptySubmissionLink,

    /// The requested status cannot be reached from the current status.
    #[error("invalid task status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// Current status.
        from: String,
        /// Requested status.
        to: String,
    },
}

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
