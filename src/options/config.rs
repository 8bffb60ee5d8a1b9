//! Defaults file parser
//!
//! Parses an optional TOML file whose `[defaults]` table overrides the
//! built-in fallback values:
//!
//! ```toml
//! [defaults]
//! focus_minutes = 50
//! pace_seconds = 60
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::options::resolve::Defaults;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusConfig {
    /// Fallback values for the command-line options
    #[serde(default)]
    pub defaults: Defaults,
}

impl FocusConfig {
    /// Parse a configuration file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse configuration content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        let d = &self.defaults;
        validate_positive("focus_minutes", d.focus_minutes)?;
        validate_positive("break_minutes", d.break_minutes)?;
        validate_positive("pace_seconds", d.pace_seconds)?;
        if d.cycles == 0 {
            bail!("Invalid default 'cycles': must be a positive integer");
        }
        Ok(())
    }
}

fn validate_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        bail!("Invalid default '{name}' = {value}: must be a finite number greater than zero");
    }
    Ok(())
}
