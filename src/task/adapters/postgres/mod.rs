//! `PostgreSQL` adapters for task collection persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool};
