//! `PostgreSQL` connection pool configuration.
//!
//! The pool is a process-wide resource: a host builds it once at startup,
//! hands clones to the `PostgreSQL`-backed adapters, and tears it down by
//! dropping the last clone at shutdown.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// Shared `PostgreSQL` connection pool type.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Errors raised while configuring the connection pool.
#[derive(Debug, Error)]
pub enum PoolSetupError {
    /// No database URL was found in the environment.
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    /// The pool could not be constructed.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Reads the database URL from the environment.
///
/// A `.env` file in the working directory is loaded first when present, so
/// local development can keep credentials out of the shell profile.
///
/// # Errors
///
/// Returns [`PoolSetupError::MissingDatabaseUrl`] when `DATABASE_URL` is
/// absent or not valid Unicode.
pub fn database_url_from_env() -> Result<String, PoolSetupError> {
    dotenvy::dotenv().ok();
    std::env::var("DATABASE_URL").map_err(|_| PoolSetupError::MissingDatabaseUrl)
}

/// Builds an r2d2 connection pool for the given database URL.
///
/// # Errors
///
/// Returns [`PoolSetupError::Pool`] when the pool cannot be constructed.
pub fn build_pool(database_url: &str) -> Result<PgPool, PoolSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().build(manager)?)
}
