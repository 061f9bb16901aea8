//! Diesel row models for user persistence.

use super::schema::users;
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Internal user identifier.
    pub id: uuid::Uuid,
    /// Registered email address.
    pub email: String,
    /// Opaque profile JSON payload.
    pub profile: Value,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Internal user identifier.
    pub id: uuid::Uuid,
    /// Registered email address.
    pub email: String,
    /// Opaque profile JSON payload.
    pub profile: Value,
}
