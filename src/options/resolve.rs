//! Option resolver
//!
//! Turns raw option text into a validated [`Configuration`]. Malformed,
//! non-positive or missing values silently fall back to the matching field
//! of [`Defaults`]; nothing here ever fails.

use serde::{Deserialize, Serialize};

/// Fallback values used when an option is missing or invalid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Focus block length in simulated minutes (default: 25)
    pub focus_minutes: f64,
    /// Break block length in simulated minutes (default: 5)
    pub break_minutes: f64,
    /// Number of focus/break cycles (default: 2)
    pub cycles: u32,
    /// Real seconds per simulated minute (default: 5)
    pub pace_seconds: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            focus_minutes: 25.0,
            break_minutes: 5.0,
            cycles: 2,
            pace_seconds: 5.0,
        }
    }
}

/// Option values as they arrived on the command line, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    /// Value of `--focus`
    pub focus: Option<String>,
    /// Value of `--break`
    pub break_minutes: Option<String>,
    /// Value of `--cycles`
    pub cycles: Option<String>,
    /// Value of `--pace`
    pub pace: Option<String>,
}

/// Validated session configuration. Every field is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Configuration {
    /// Focus block length in simulated minutes
    pub focus_minutes: f64,
    /// Break block length in simulated minutes
    pub break_minutes: f64,
    /// Number of cycles to run
    pub cycles: u32,
    /// Real seconds per simulated minute
    pub pace_seconds: f64,
}

impl Configuration {
    /// Resolve raw options against `defaults`, field by field.
    #[must_use]
    pub fn resolve(raw: &RawOptions, defaults: &Defaults) -> Self {
        Self {
            focus_minutes: positive_real(raw.focus.as_deref(), defaults.focus_minutes),
            break_minutes: positive_real(raw.break_minutes.as_deref(), defaults.break_minutes),
            cycles: positive_integer(raw.cycles.as_deref(), defaults.cycles),
            pace_seconds: positive_real(raw.pace.as_deref(), defaults.pace_seconds),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::resolve(&RawOptions::default(), &Defaults::default())
    }
}

/// Parse a finite, strictly positive real number, else `fallback`.
fn positive_real(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(fallback)
}

/// Parse a strictly positive integer, else `fallback`.
fn positive_integer(raw: Option<&str>, fallback: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(fallback)
}
