//! Fjord Focus - breathing and focus timer
//!
//! Narrates cycles of focus and break blocks. Each block is split into
//! steps that carry a breathing cue and pause for a pace-scaled interval;
//! each focus block opens with a coastline fact.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod coast;
pub mod options;
pub mod session;
pub mod timer;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use coast::{Fact, BREAK_SCRIPT, FACTS, FOCUS_SCRIPT};
pub use options::{Configuration, Defaults, FocusConfig, RawOptions};
pub use session::{EventSink, Orchestrator, SessionEvent, SessionSummary};
pub use timer::{BlockKind, NoopWaiter, StepEvent, StepPlan, StepTimer, TokioWaiter, Waiter};
