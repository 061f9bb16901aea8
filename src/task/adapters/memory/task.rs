//! In-memory repository for task collection tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{OwnerEmail, Task, TaskId, TaskOverwrite},
    ports::{
        DeleteOutcome, SweepOutcome, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
        UpdateOutcome,
    },
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    owner_index: HashMap<OwnerEmail, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Removes a task ID from the owner index, cleaning up the entry if empty.
fn remove_from_owner_index(
    index: &mut HashMap<OwnerEmail, Vec<TaskId>>,
    task_id: TaskId,
    owner: &OwnerEmail,
) {
    if let Some(ids) = index.get_mut(owner) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(owner);
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state
            .owner_index
            .entry(task.owner().clone())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner: &OwnerEmail) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let tasks = state
            .owner_index
            .get(owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn overwrite(
        &self,
        id: TaskId,
        changes: &TaskOverwrite,
    ) -> TaskRepositoryResult<UpdateOutcome> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let Some(task) = state.tasks.get_mut(&id) else {
            return Ok(UpdateOutcome::default());
        };

        let modified = u64::from(task.apply_overwrite(changes));
        Ok(UpdateOutcome {
            matched: 1,
            modified,
        })
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<DeleteOutcome> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let Some(task) = state.tasks.remove(&id) else {
            return Ok(DeleteOutcome::default());
        };

        remove_from_owner_index(&mut state.owner_index, id, task.owner());
        Ok(DeleteOutcome { deleted: 1 })
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let overdue = state
            .tasks
            .values()
            .filter(|task| task.is_overdue(now))
            .cloned()
            .collect();
        Ok(overdue)
    }

    async fn expire_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<SweepOutcome> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let mut outcome = SweepOutcome::default();
        for task in state.tasks.values_mut() {
            if task.is_overdue(now) {
                task.expire();
                outcome.matched += 1;
                outcome.modified += 1;
            }
        }
        Ok(outcome)
    }
}
