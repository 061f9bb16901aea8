//! Service layer for the expiration sweep.
//!
//! The sweep selects tasks that are strictly past their deadline and still
//! active, and moves them to the timed-out status. It has two entry points
//! with the same predicate: an on-demand pass that reports the raw store
//! counts to its caller, and a periodic tick that logs the count and
//! swallows failures because no caller is waiting on it.

use crate::task::ports::{SweepOutcome, TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Expiration sweep orchestration service.
#[derive(Clone)]
pub struct ExpirationSweepService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ExpirationSweepService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new expiration sweep service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Runs the sweep once, on demand.
    ///
    /// Applies the transition to all matching tasks store-side in one bulk
    /// operation and returns the raw counts.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the bulk operation fails; the
    /// failure is surfaced to the caller without retry.
    pub async fn run_manual(&self) -> Result<SweepOutcome, TaskRepositoryError> {
        self.repository.expire_overdue(self.clock.utc()).await
    }

    /// Runs one timer tick of the sweep.
    ///
    /// Reads the matching set first and applies the bulk transition only
    /// when it is non-empty, then logs the affected count. The read and
    /// the write are not atomic with respect to concurrent writers; the
    /// race is benign because the bulk write re-applies the same
    /// active-only predicate. Failures are logged and swallowed — a timer
    /// has no caller to report to — and nothing is retried.
    pub async fn run_tick(&self) {
        match self.sweep_when_overdue().await {
            Ok(None) => {}
            Ok(Some(outcome)) => {
                tracing::info!(expired = outcome.modified, "overdue tasks moved to timeout");
            }
            Err(err) => {
                tracing::error!(error = %err, "expiration sweep tick failed");
            }
        }
    }

    /// Runs [`Self::run_tick`] once per fixed interval, forever.
    ///
    /// A tick delayed past its slot is not caught up; the schedule shifts
    /// instead. Hosts spawn this on their runtime; overlapping sweeps from
    /// multiple hosts are possible and tolerated, since each applies the
    /// same idempotent transition.
    pub async fn run_periodic(&self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.run_tick().await;
        }
    }

    async fn sweep_when_overdue(&self) -> Result<Option<SweepOutcome>, TaskRepositoryError> {
        let now = self.clock.utc();
        let overdue = self.repository.find_overdue(now).await?;
        if overdue.is_empty() {
            return Ok(None);
        }
        let outcome = self.repository.expire_overdue(now).await?;
        Ok(Some(outcome))
    }
}
