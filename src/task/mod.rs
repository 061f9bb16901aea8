//! Owner-scoped task collection and expiration sweep for Taskdesk.
//!
//! This module implements the task side of the backend: listing a user's
//! tasks, creating tasks with a creation-time ordering marker, overwriting
//! and deleting tasks by identifier, and the expiration sweep that moves
//! overdue active tasks to the timed-out status. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
