//! Validated owner email type.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an owner email, matching the `VARCHAR(255)` column.
const MAX_OWNER_LENGTH: usize = 255;

/// Validated owner email carried on every task.
///
/// The owner email is the only multi-tenancy mechanism: listing filters on
/// exact equality with this value. The value is trimmed but case is
/// preserved, matching the registry's comparison rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerEmail(String);

impl OwnerEmail {
    /// Creates a validated owner email.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyOwnerEmail`] when the value is empty
    /// after trimming, or [`TaskDomainError::OwnerEmailTooLong`] when it
    /// exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyOwnerEmail);
        }

        if normalized.len() > MAX_OWNER_LENGTH {
            return Err(TaskDomainError::OwnerEmailTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the owner email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OwnerEmail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OwnerEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
