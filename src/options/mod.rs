//! Session options
//!
//! Resolves raw command-line values into a validated configuration, with
//! fallback defaults that can be overridden from a TOML file.

pub mod config;
pub mod resolve;

pub use config::FocusConfig;
pub use resolve::{Configuration, Defaults, RawOptions};
