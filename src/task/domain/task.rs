//! Task aggregate root and related task lifecycle types.

use super::{OwnerEmail, ParseTaskStatusError, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is open and counts against its deadline.
    Active,
    /// Task has been finished by its owner.
    Completed,
    /// Task passed its deadline while still active.
    Timeout,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Timeout => "timeout",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "timeout" => Ok(Self::Timeout),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Validated fields for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Owner the task belongs to.
    pub owner: OwnerEmail,
    /// Required task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional category tag.
    pub category: Option<String>,
    /// Initial lifecycle status.
    pub status: TaskStatus,
    /// Optional deadline; tasks without one never expire.
    pub deadline: Option<DateTime<Utc>>,
}

/// Replacement values applied by an update.
///
/// An update is an overwrite, not a merge: all four fields are written as
/// supplied, and a field left as `None` clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskOverwrite {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement category tag.
    pub category: Option<String>,
    /// Replacement lifecycle status.
    pub status: Option<TaskStatus>,
}

impl TaskOverwrite {
    /// Creates an empty overwrite, which clears all four fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the replacement lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: OwnerEmail,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    status: Option<TaskStatus>,
    deadline: Option<DateTime<Utc>>,
    order: i64,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner email.
    pub owner: OwnerEmail,
    /// Persisted title, if any.
    pub title: Option<String>,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted category tag, if any.
    pub category: Option<String>,
    /// Persisted lifecycle status, if any.
    pub status: Option<TaskStatus>,
    /// Persisted deadline, if any.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted creation-time ordering marker.
    pub order: i64,
}

impl Task {
    /// Creates a new task from a draft.
    ///
    /// The ordering marker is taken from the clock as coarse millisecond
    /// time; collisions between tasks created in the same instant are
    /// tolerated, ties are broken arbitrarily by callers that sort.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the draft title is
    /// empty after trimming.
    pub fn create(draft: TaskDraft, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            id: TaskId::new(),
            owner: draft.owner,
            title: Some(title.to_owned()),
            description: draft.description,
            category: draft.category,
            status: Some(draft.status),
            deadline: draft.deadline,
            order: clock.utc().timestamp_millis(),
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            category: data.category,
            status: data.status,
            deadline: data.deadline,
            order: data.order,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owner email.
    #[must_use]
    pub const fn owner(&self) -> &OwnerEmail {
        &self.owner
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the category tag, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the lifecycle status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the creation-time ordering marker.
    #[must_use]
    pub const fn order(&self) -> i64 {
        self.order
    }

    /// Returns whether the task is eligible for expiration at `now`.
    ///
    /// Eligible means strictly past its deadline while still active: a
    /// task due exactly at `now` is not yet overdue, and a task in any
    /// status other than [`TaskStatus::Active`] is never touched, however
    /// far past its deadline.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == Some(TaskStatus::Active)
            && self.deadline.is_some_and(|deadline| deadline < now)
    }

    /// Moves the task to [`TaskStatus::Timeout`].
    ///
    /// The only field touched is the status; identifier, owner, deadline
    /// and ordering marker stay as they are.
    pub const fn expire(&mut self) {
        self.status = Some(TaskStatus::Timeout);
    }

    /// Replaces the overwritable fields with the supplied values.
    ///
    /// Returns whether anything changed, mirroring a document store's
    /// modified count: overwriting a task with its current values reports
    /// `false`.
    pub fn apply_overwrite(&mut self, changes: &TaskOverwrite) -> bool {
        let unchanged = self.title == changes.title
            && self.description == changes.description
            && self.category == changes.category
            && self.status == changes.status;
        if unchanged {
            return false;
        }

        self.title = changes.title.clone();
        self.description = changes.description.clone();
        self.category = changes.category.clone();
        self.status = changes.status;
        true
    }
}
