//! Diesel schema for task collection persistence.

diesel::table! {
    /// Task records scoped to an owner email.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Owner email the task belongs to.
        #[max_length = 255]
        owner -> Varchar,
        /// Task title; cleared when an overwrite omits it.
        #[max_length = 255]
        title -> Nullable<Varchar>,
        /// Free-form description.
        description -> Nullable<Text>,
        /// Category tag.
        #[max_length = 255]
        category -> Nullable<Varchar>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Nullable<Varchar>,
        /// Deadline after which an active task becomes overdue.
        deadline -> Nullable<Timestamptz>,
        /// Creation-time ordering marker in milliseconds.
        sort_order -> BigInt,
    }
}
