//! Session events
//!
//! Everything the orchestrator reports goes through an [`EventSink`] as a
//! [`SessionEvent`]. Events are transient: a sink renders or serialises them
//! and drops them.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::coast::Fact;
use crate::options::Configuration;
use crate::timer::{BlockKind, StepEvent};

/// A single reportable moment in a session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Session is about to start its first block
    SessionStarted {
        /// Resolved configuration for this session
        config: Configuration,
        /// Wall-clock start time
        started_at: DateTime<Utc>,
    },
    /// A focus or break block is starting
    BlockStarted {
        /// 1-based cycle number
        cycle: u32,
        /// Total cycles in the session
        total_cycles: u32,
        /// Focus or break
        kind: BlockKind,
        /// Block length in simulated minutes
        minutes: f64,
        /// Steps the block is divided into
        total_steps: u64,
        /// Seconds suspended after each step
        interval_seconds: f64,
        /// Coastline fact, present for focus blocks
        #[serde(skip_serializing_if = "Option::is_none")]
        fact: Option<Fact>,
    },
    /// One step of the current block
    Step {
        /// 1-based cycle number
        cycle: u32,
        /// Step details
        #[serde(flatten)]
        step: StepEvent,
    },
    /// The current block ran all of its steps
    BlockFinished {
        /// 1-based cycle number
        cycle: u32,
        /// Focus or break
        kind: BlockKind,
        /// Steps that ran
        steps: u64,
    },
    /// All cycles are done
    SessionFinished {
        /// Totals for the whole session
        summary: SessionSummary,
    },
}

/// Totals reported when a session completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Wall-clock start time
    pub started_at: DateTime<Utc>,
    /// Wall-clock finish time
    pub finished_at: DateTime<Utc>,
    /// Cycles completed
    pub cycles: u32,
    /// Focus blocks completed
    pub focus_blocks: u32,
    /// Break blocks completed
    pub break_blocks: u32,
    /// Steps narrated across all blocks
    pub steps: u64,
}

impl SessionSummary {
    /// Wall-clock time between start and finish
    #[must_use]
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Receives session events in order
pub trait EventSink {
    /// Report one event. An error aborts the session.
    fn emit(&mut self, event: &SessionEvent) -> Result<()>;
}
