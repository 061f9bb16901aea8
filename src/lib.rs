//! Taskdesk: task-management backend core.
//!
//! This crate provides the persistence-facing core of a task-management
//! backend: an owner-scoped task collection with create/list/update/delete
//! semantics, an idempotent user registry keyed by email, and an expiration
//! sweep that reclassifies overdue active tasks as timed out.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! HTTP routing and request parsing stay outside this crate; a host binds
//! its routes directly to the service operations in [`task::services`] and
//! [`user::services`]. The periodic trigger for the expiration sweep is
//! likewise external: a host spawns
//! [`task::services::ExpirationSweepService::run_periodic`] or calls
//! [`task::services::ExpirationSweepService::run_tick`] from its own
//! scheduler.
//!
//! # Modules
//!
//! - [`task`]: Owner-scoped task collection and expiration sweep
//! - [`user`]: Idempotent user registration and lookup by email
//! - [`db`]: `PostgreSQL` connection pool configuration

pub mod db;
pub mod task;
pub mod user;
