//! Domain model for the task collection.
//!
//! The task domain models owner-scoped task records, the unconditional
//! overwrite applied by updates, and the expiration predicate that selects
//! overdue active tasks, while keeping all infrastructure concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod owner;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use owner::OwnerEmail;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskOverwrite, TaskStatus};
