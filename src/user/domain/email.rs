//! Validated email address type.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an email address, matching the `VARCHAR(255)` column.
const MAX_EMAIL_LENGTH: usize = 255;

/// Validated email address.
///
/// The address is the registry key and the owner reference carried on
/// tasks. Validation is deliberately shallow: the value is trimmed and must
/// be non-empty and short enough to persist. Case is preserved, so lookups
/// compare the address exactly as it was registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyEmail`] when the value is empty after
    /// trimming, or [`UserDomainError::EmailTooLong`] when it exceeds 255
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(UserDomainError::EmptyEmail);
        }

        if normalized.len() > MAX_EMAIL_LENGTH {
            return Err(UserDomainError::EmailTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
