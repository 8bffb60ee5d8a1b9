//! Focus sessions
//!
//! Sequences focus and break blocks over a number of cycles and reports
//! progress as a stream of events.

pub mod event;
pub mod orchestrator;

pub use event::{EventSink, SessionEvent, SessionSummary};
pub use orchestrator::{Orchestrator, PlannedBlock};
