//! Shared test helpers for in-memory integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{ExpirationSweepService, TaskCollectionService},
};
use taskdesk::user::{adapters::memory::InMemoryUserRepository, services::UserRegistryService};

/// Task-side services sharing one repository, as a host would wire them.
pub struct TaskHarness {
    /// CRUD surface over the shared repository.
    pub collection: TaskCollectionService<InMemoryTaskRepository, DefaultClock>,
    /// Sweep entry points over the same repository.
    pub sweep: ExpirationSweepService<InMemoryTaskRepository, DefaultClock>,
}

/// Provides task services over a fresh shared in-memory repository.
#[fixture]
pub fn task_harness() -> TaskHarness {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);
    TaskHarness {
        collection: TaskCollectionService::new(Arc::clone(&repository), Arc::clone(&clock)),
        sweep: ExpirationSweepService::new(repository, clock),
    }
}

/// Provides a user registry service over a fresh in-memory repository.
#[fixture]
pub fn registry() -> UserRegistryService<InMemoryUserRepository> {
    UserRegistryService::new(Arc::new(InMemoryUserRepository::new()))
}
