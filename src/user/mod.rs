//! User registration and lookup for Taskdesk.
//!
//! This module implements the user registry: registering a user record on
//! first sight of an email address (idempotently, so repeated registration
//! attempts are a no-op rather than an error) and looking registered users
//! up by email. The email address is the sole multi-tenancy mechanism; task
//! ownership references it by value. The module follows hexagonal
//! architecture:
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
