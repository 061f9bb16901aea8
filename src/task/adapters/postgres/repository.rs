//! `PostgreSQL` repository implementation for task collection storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{OwnerEmail, PersistedTaskData, Task, TaskId, TaskOverwrite, TaskStatus},
    ports::{
        DeleteOutcome, SweepOutcome, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
        UpdateOutcome,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_owner(&self, owner: &OwnerEmail) -> TaskRepositoryResult<Vec<Task>> {
        let owner_value = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner.eq(owner_value))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn overwrite(
        &self,
        id: TaskId,
        changes: &TaskOverwrite,
    ) -> TaskRepositoryResult<UpdateOutcome> {
        let requested = changes.clone();
        self.run_blocking(move |connection| {
            let matched_rows: i64 = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .count()
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;

            // The guard predicate makes a value-identical overwrite count
            // zero modified rows, matching the store-native modified count.
            let modified_rows = diesel::sql_query(concat!(
                "UPDATE tasks SET title = $2, description = $3, category = $4, status = $5 ",
                "WHERE id = $1 AND (title IS DISTINCT FROM $2 ",
                "OR description IS DISTINCT FROM $3 ",
                "OR category IS DISTINCT FROM $4 ",
                "OR status IS DISTINCT FROM $5)",
            ))
            .bind::<diesel::sql_types::Uuid, _>(id.into_inner())
            .bind::<diesel::sql_types::Nullable<diesel::sql_types::Varchar>, _>(requested.title)
            .bind::<diesel::sql_types::Nullable<diesel::sql_types::Text>, _>(requested.description)
            .bind::<diesel::sql_types::Nullable<diesel::sql_types::Varchar>, _>(requested.category)
            .bind::<diesel::sql_types::Nullable<diesel::sql_types::Varchar>, _>(
                requested.status.map(|status| status.as_str().to_owned()),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            Ok(UpdateOutcome {
                matched: u64::try_from(matched_rows).map_err(TaskRepositoryError::persistence)?,
                modified: u64::try_from(modified_rows)
                    .map_err(TaskRepositoryError::persistence)?,
            })
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<DeleteOutcome> {
        self.run_blocking(move |connection| {
            let deleted_rows = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(DeleteOutcome {
                deleted: u64::try_from(deleted_rows).map_err(TaskRepositoryError::persistence)?,
            })
        })
        .await
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = diesel::sql_query(concat!(
                "SELECT id, owner, title, description, category, status, deadline, sort_order ",
                "FROM tasks WHERE status = 'active' AND deadline < $1",
            ))
            .bind::<diesel::sql_types::Timestamptz, _>(now)
            .load::<TaskRow>(connection)
            .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn expire_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<SweepOutcome> {
        self.run_blocking(move |connection| {
            let affected_rows = diesel::sql_query(
                "UPDATE tasks SET status = 'timeout' WHERE status = 'active' AND deadline < $1",
            )
            .bind::<diesel::sql_types::Timestamptz, _>(now)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            // Every row the predicate matches differs in status from the
            // written value, so the matched and modified counts coincide.
            let affected = u64::try_from(affected_rows).map_err(TaskRepositoryError::persistence)?;
            Ok(SweepOutcome {
                matched: affected,
                modified: affected,
            })
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner: task.owner().as_str().to_owned(),
        title: task.title().map(ToOwned::to_owned),
        description: task.description().map(ToOwned::to_owned),
        category: task.category().map(ToOwned::to_owned),
        status: task.status().map(|status| status.as_str().to_owned()),
        deadline: task.deadline(),
        sort_order: task.order(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        owner,
        title,
        description,
        category,
        status,
        deadline,
        sort_order,
    } = row;

    let owner_email =
        OwnerEmail::new(owner).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let parsed_status = status
        .as_deref()
        .map(TaskStatus::try_from)
        .transpose()
        .map_err(TaskRepositoryError::invalid_persisted_data)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner: owner_email,
        title,
        description,
        category,
        status: parsed_status,
        deadline,
        order: sort_order,
    }))
}
