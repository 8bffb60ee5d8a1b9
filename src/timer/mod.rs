//! Step timing
//!
//! Converts block durations into discrete narrated steps and suspends
//! between them through an injectable waiter.

pub mod step;
pub mod wait;

pub use step::{BlockKind, StepEvent, StepPlan, StepTimer};
pub use wait::{NoopWaiter, TokioWaiter, Waiter};
