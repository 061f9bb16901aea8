//! Application services for the task collection and expiration sweep.

mod collection;
mod expiration;

pub use collection::{
    CreateTaskRequest, TaskCollectionError, TaskCollectionResult, TaskCollectionService,
};
pub use expiration::ExpirationSweepService;
