//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The owner email is empty after trimming.
    #[error("owner email must not be empty")]
    EmptyOwnerEmail,

    /// The owner email exceeds the 255-character storage limit.
    #[error("owner email exceeds 255 character limit: {0}")]
    OwnerEmailTooLong(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The value is not a well-formed task identifier.
    #[error("invalid task identifier: {0}")]
    InvalidTaskId(String),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
