//! Port contracts for the task collection.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{
    DeleteOutcome, SweepOutcome, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
    UpdateOutcome,
};
