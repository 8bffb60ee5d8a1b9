//! Suspension capability for the step timer
//!
//! The timer never sleeps directly; it awaits a [`Waiter`]. Production runs
//! use [`TokioWaiter`], dry runs and tests use [`NoopWaiter`] or a recording
//! waiter so no real time elapses.

use std::future::Future;
use std::time::Duration;

use anyhow::{bail, Result};
use tokio::sync::watch;

/// Something the step timer can suspend on between steps
pub trait Waiter {
    /// Suspend for `interval`. An error aborts the running session.
    fn wait(&self, interval: Duration) -> impl Future<Output = Result<()>>;
}

/// Sleeps on the tokio timer, optionally cut short by a shutdown signal
#[derive(Debug, Clone, Default)]
pub struct TokioWaiter {
    shutdown: Option<watch::Receiver<bool>>,
}

impl TokioWaiter {
    /// A waiter that always sleeps the full interval
    #[must_use]
    pub const fn new() -> Self {
        Self { shutdown: None }
    }

    /// A waiter that fails as soon as `shutdown` carries `true`
    #[must_use]
    pub const fn with_shutdown(shutdown: watch::Receiver<bool>) -> Self {
        Self {
            shutdown: Some(shutdown),
        }
    }
}

impl Waiter for TokioWaiter {
    async fn wait(&self, interval: Duration) -> Result<()> {
        let Some(shutdown) = &self.shutdown else {
            tokio::time::sleep(interval).await;
            return Ok(());
        };

        let mut shutdown = shutdown.clone();
        if *shutdown.borrow_and_update() {
            bail!("Session interrupted before the next step");
        }

        // A dropped sender disables the shutdown branch; the sleep still completes.
        tokio::select! {
            () = tokio::time::sleep(interval) => Ok(()),
            Ok(_) = shutdown.wait_for(|stop| *stop) => {
                bail!("Session interrupted during a {:.1}s pause", interval.as_secs_f64())
            }
        }
    }
}

/// Returns immediately. Used for dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWaiter;

impl Waiter for NoopWaiter {
    async fn wait(&self, _interval: Duration) -> Result<()> {
        Ok(())
    }
}
