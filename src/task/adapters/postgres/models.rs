//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Owner email.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub owner: String,
    /// Task title.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Varchar>)]
    pub title: Option<String>,
    /// Free-form description.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub description: Option<String>,
    /// Category tag.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Varchar>)]
    pub category: Option<String>,
    /// Lifecycle status.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Varchar>)]
    pub status: Option<String>,
    /// Deadline timestamp.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Timestamptz>)]
    pub deadline: Option<DateTime<Utc>>,
    /// Creation-time ordering marker.
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub sort_order: i64,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owner email.
    pub owner: String,
    /// Task title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Category tag.
    pub category: Option<String>,
    /// Lifecycle status.
    pub status: Option<String>,
    /// Deadline timestamp.
    pub deadline: Option<DateTime<Utc>>,
    /// Creation-time ordering marker.
    pub sort_order: i64,
}
