//! Service layer for owner-scoped task management.

use crate::task::{
    domain::{OwnerEmail, Task, TaskDomainError, TaskDraft, TaskId, TaskOverwrite, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    email: String,
    title: String,
    description: Option<String>,
    category: Option<String>,
    status: Option<TaskStatus>,
    deadline: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required owner email and title.
    #[must_use]
    pub fn new(email: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            title: title.into(),
            description: None,
            category: None,
            status: None,
            deadline: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the initial lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Service-level errors for task collection operations.
#[derive(Debug, Error)]
pub enum TaskCollectionError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The referenced task does not exist, or an overwrite changed nothing.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task collection service operations.
pub type TaskCollectionResult<T> = Result<T, TaskCollectionError>;

/// Task collection orchestration service.
///
/// Operations that reference an existing task take the identifier in its
/// raw string form and parse it first, so a malformed identifier is
/// reported as an input error without a store round-trip.
#[derive(Clone)]
pub struct TaskCollectionService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskCollectionService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task collection service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all tasks belonging to the given owner, in store-native
    /// order, regardless of status or deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::Domain`] when the email is empty and
    /// [`TaskCollectionError::Repository`] when the lookup fails.
    pub async fn list_tasks_for_owner(&self, email: &str) -> TaskCollectionResult<Vec<Task>> {
        let owner = OwnerEmail::new(email)?;
        Ok(self.repository.list_by_owner(&owner).await?)
    }

    /// Creates a new task for the request's owner.
    ///
    /// The creation-time ordering marker is assigned from the clock; the
    /// status defaults to [`TaskStatus::Active`] when the request omits it.
    /// The returned aggregate carries the new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::Domain`] when the email or title is
    /// missing/empty and [`TaskCollectionError::Repository`] when
    /// persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskCollectionResult<Task> {
        let CreateTaskRequest {
            email,
            title,
            description,
            category,
            status,
            deadline,
        } = request;

        let owner = OwnerEmail::new(email)?;
        let draft = TaskDraft {
            owner,
            title,
            description,
            category,
            status: status.unwrap_or(TaskStatus::Active),
            deadline,
        };
        let task = Task::create(draft, &*self.clock)?;
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Overwrites the replaceable fields of the task with the given
    /// identifier.
    ///
    /// The write replaces `title`, `description`, `category` and `status`
    /// with the supplied values unconditionally; fields the caller omits
    /// are cleared rather than kept.
    ///
    /// An overwrite whose values all equal the stored ones modifies zero
    /// documents and is reported as [`TaskCollectionError::NotFound`], the
    /// same answer a missing task gets. Callers that need to distinguish
    /// the two cases must compare before writing; the behaviour is kept
    /// deliberately (see DESIGN.md) and pinned by a test.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::Domain`] when the identifier is
    /// malformed, [`TaskCollectionError::NotFound`] when no task has the
    /// identifier or the overwrite changed nothing, and
    /// [`TaskCollectionError::Repository`] when persistence fails.
    pub async fn update_task(&self, id: &str, changes: &TaskOverwrite) -> TaskCollectionResult<()> {
        let task_id = TaskId::parse(id)?;

        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskCollectionError::NotFound(task_id))?;

        let outcome = self.repository.overwrite(task_id, changes).await?;
        if outcome.modified == 0 {
            return Err(TaskCollectionError::NotFound(task_id));
        }
        Ok(())
    }

    /// Deletes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::Domain`] when the identifier is
    /// malformed, [`TaskCollectionError::NotFound`] when the store deleted
    /// zero documents, and [`TaskCollectionError::Repository`] when
    /// persistence fails.
    pub async fn delete_task(&self, id: &str) -> TaskCollectionResult<()> {
        let task_id = TaskId::parse(id)?;

        let outcome = self.repository.delete(task_id).await?;
        if outcome.deleted == 0 {
            return Err(TaskCollectionError::NotFound(task_id));
        }
        Ok(())
    }
}
