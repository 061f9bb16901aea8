//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmail,

    /// The email address exceeds the 255-character storage limit.
    #[error("email address exceeds 255 character limit: {0}")]
    EmailTooLong(String),
}
