//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;

use crate::session::{EventSink, SessionEvent};
use crate::timer::Waiter;

/// Waiter that returns immediately and remembers every requested interval.
#[derive(Debug, Default)]
pub struct RecordingWaiter {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingWaiter {
    /// Intervals requested so far, in order
    #[must_use]
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

impl Waiter for RecordingWaiter {
    async fn wait(&self, interval: Duration) -> Result<()> {
        self.waits.lock().unwrap().push(interval);
        Ok(())
    }
}

/// Sink that keeps every session event it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Events in emission order
    pub events: Vec<SessionEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &SessionEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
