//! Service layer for idempotent user registration and email lookup.

use crate::user::{
    domain::{EmailAddress, User, UserDomainError, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    email: String,
    profile: Value,
}

impl RegisterUserRequest {
    /// Creates a request for the given email with an empty profile.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            profile: Value::Null,
        }
    }

    /// Sets the opaque profile payload persisted alongside the email.
    #[must_use]
    pub fn with_profile(mut self, profile: Value) -> Self {
        self.profile = profile;
        self
    }
}

/// Result of a registration attempt.
///
/// Registering an email that is already taken is a no-op, not an error;
/// callers inspect the outcome to learn whether a record was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A new user record was inserted.
    Created(UserId),
    /// A user with the email already existed; the store was not modified.
    AlreadyRegistered,
}

impl RegistrationOutcome {
    /// Returns whether a new record was inserted.
    #[must_use]
    pub const fn created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Returns the new identifier when a record was inserted.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Created(id) => Some(*id),
            Self::AlreadyRegistered => None,
        }
    }
}

/// Service-level errors for user registry operations.
#[derive(Debug, Error)]
pub enum UserRegistryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user registry service operations.
pub type UserRegistryServiceResult<T> = Result<T, UserRegistryServiceError>;

/// User registration and lookup orchestration service.
#[derive(Clone)]
pub struct UserRegistryService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserRegistryService<R>
where
    R: UserRepository,
{
    /// Creates a new user registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a user record for the request's email.
    ///
    /// The first registration for an email inserts a record and returns
    /// [`RegistrationOutcome::Created`]; every later attempt returns
    /// [`RegistrationOutcome::AlreadyRegistered`] without touching the
    /// store. A duplicate surfaced by the store in the window between the
    /// lookup and the insert is reported the same way, so concurrent
    /// registration of one email stays idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistryServiceError`] when the email fails validation
    /// or the repository fails.
    pub async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> UserRegistryServiceResult<RegistrationOutcome> {
        let RegisterUserRequest { email, profile } = request;
        let address = EmailAddress::new(email)?;

        if self.repository.find_one_by_email(&address).await?.is_some() {
            return Ok(RegistrationOutcome::AlreadyRegistered);
        }

        let user = User::new(address, profile);
        match self.repository.insert(&user).await {
            Ok(()) => Ok(RegistrationOutcome::Created(user.id())),
            Err(UserRepositoryError::DuplicateEmail(_)) => {
                Ok(RegistrationOutcome::AlreadyRegistered)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Returns all users registered under the given email.
    ///
    /// The expected cardinality is zero or one; the sequence shape of the
    /// store query is kept.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistryServiceError::Domain`] when the email is empty
    /// and [`UserRegistryServiceError::Repository`] when the lookup fails.
    pub async fn find_users_by_email(&self, email: &str) -> UserRegistryServiceResult<Vec<User>> {
        let address = EmailAddress::new(email)?;
        Ok(self.repository.find_by_email(&address).await?)
    }
}
