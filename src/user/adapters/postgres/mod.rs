//! `PostgreSQL` adapters for user registry persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresUserRepository, UserPgPool};
