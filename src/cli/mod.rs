//! CLI surface and output formatting
//!
//! Argument parsing plus the two event sinks: colored narration and
//! JSON Lines.

pub mod args;
pub mod display;
pub mod jsonl;

pub use args::{attach_pacing_values, Cli, OutputFormat};
pub use display::SessionDisplay;
pub use jsonl::JsonLinesSink;
