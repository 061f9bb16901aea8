//! Repository port for user persistence and email lookup.

use crate::user::domain::{EmailAddress, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
///
/// Email uniqueness is owned by the registry service, which looks a record
/// up before inserting; implementations additionally report duplicates so
/// the window between lookup and insert stays covered.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user record.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the user ID
    /// already exists or [`UserRepositoryError::DuplicateEmail`] when the
    /// email is already registered.
    async fn insert(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds at most one user with the given email.
    ///
    /// Returns `None` when no user is registered under the email.
    async fn find_one_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>>;

    /// Returns all users with the given email.
    ///
    /// The expected cardinality is zero or one; the sequence shape matches
    /// the underlying store query.
    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Vec<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// A user with the same email already exists.
    #[error("duplicate email address: {0}")]
    DuplicateEmail(EmailAddress),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
