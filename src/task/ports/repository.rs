//! Repository port for task persistence, lookup, and expiration.

use crate::task::domain::{OwnerEmail, Task, TaskId, TaskOverwrite};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Result of a single-document overwrite.
///
/// The counters keep the store-native shape: `matched` is how many
/// documents the identifier filter selected, `modified` how many actually
/// changed. A value-identical overwrite matches one document and modifies
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Documents selected by the filter.
    pub matched: u64,
    /// Documents whose stored values changed.
    pub modified: u64,
}

/// Result of a single-document delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    /// Documents removed.
    pub deleted: u64,
}

/// Result of a bulk expiration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepOutcome {
    /// Documents selected by the expiration predicate.
    pub matched: u64,
    /// Documents moved to the timed-out status.
    pub modified: u64,
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks belonging to the given owner, in store-native
    /// order.
    async fn list_by_owner(&self, owner: &OwnerEmail) -> TaskRepositoryResult<Vec<Task>>;

    /// Overwrites the replaceable fields of the task with the given
    /// identifier.
    ///
    /// The write is unconditional with respect to field presence (a `None`
    /// clears the stored value) but counts as a modification only when a
    /// stored value actually changes.
    async fn overwrite(
        &self,
        id: TaskId,
        changes: &TaskOverwrite,
    ) -> TaskRepositoryResult<UpdateOutcome>;

    /// Deletes the task with the given identifier.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<DeleteOutcome>;

    /// Returns all tasks that are strictly past their deadline and still
    /// active at `now`.
    async fn find_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<Vec<Task>>;

    /// Moves every task that is strictly past its deadline and still
    /// active at `now` to the timed-out status, in one bulk operation.
    async fn expire_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<SweepOutcome>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
