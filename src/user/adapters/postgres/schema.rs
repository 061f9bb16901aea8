//! Diesel schema for user registry persistence.
//!
//! The `email` column carries a unique index. The registry service still
//! performs its own lookup-then-insert; the index covers the window between
//! the two.

diesel::table! {
    /// Registered user records keyed by unique email.
    users (id) {
        /// Internal user identifier.
        id -> Uuid,
        /// Unique email address the record was registered under.
        #[max_length = 255]
        email -> Varchar,
        /// Opaque profile payload, persisted verbatim.
        profile -> Jsonb,
    }
}
