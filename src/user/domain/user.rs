//! User aggregate root.

use super::{EmailAddress, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registered user aggregate root.
///
/// Beyond the identifier and email, a user carries an opaque `profile`
/// payload. The core persists it verbatim and never inspects it; whatever
/// the registration request supplied comes back unchanged on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    profile: Value,
}

/// Parameter object for reconstructing a persisted user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted opaque profile payload.
    pub profile: Value,
}

impl User {
    /// Creates a new user record.
    #[must_use]
    pub fn new(email: EmailAddress, profile: Value) -> Self {
        Self {
            id: UserId::new(),
            email,
            profile,
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            profile: data.profile,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the opaque profile payload.
    #[must_use]
    pub const fn profile(&self) -> &Value {
        &self.profile
    }
}
