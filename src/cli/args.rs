//! Command-line arguments
//!
//! The four pacing options are taken as raw text and validated later by the
//! option resolver, so a malformed value never stops the program. A flag
//! given without a value, or followed by another `--flag`, counts as absent.
//! Repeating a pacing flag is allowed; the last occurrence wins.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::options::RawOptions;

/// Flags whose values are handed to the option resolver as raw text
const PACING_FLAGS: [&str; 4] = ["--focus", "--break", "--cycles", "--pace"];

/// Breathing and focus timer
///
/// Narrates focus and break blocks, pairing each focus block with a
/// coastline fact and every step with a breathing cue.
#[derive(Parser, Debug)]
#[command(name = "fjord-focus", version, about, args_override_self = true)]
pub struct Cli {
    /// Focus block length in minutes, scaled by --pace (default: 25)
    #[arg(long, value_name = "MINUTES", num_args = 0..=1)]
    pub focus: Option<Option<String>>,

    /// Break block length in minutes, scaled by --pace (default: 5)
    #[arg(long = "break", value_name = "MINUTES", num_args = 0..=1)]
    pub break_minutes: Option<Option<String>>,

    /// Number of focus/break cycles (default: 2)
    #[arg(long, value_name = "COUNT", num_args = 0..=1)]
    pub cycles: Option<Option<String>>,

    /// Real seconds per simulated minute; 60 for real time (default: 5)
    #[arg(long, value_name = "SECONDS", num_args = 0..=1)]
    pub pace: Option<Option<String>>,

    /// TOML file overriding the built-in defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Narrate the whole session without pausing between steps
    #[arg(long)]
    pub dry_run: bool,

    /// Let Ctrl-C stop the session between steps
    #[arg(long)]
    pub interruptible: bool,
}

/// How session events are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable narration
    Text,
    /// One JSON object per event
    Json,
}

impl Cli {
    /// Parse the process arguments. Exits on `--help`, `--version` or a
    /// usage error in the non-pacing flags.
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse_from(attach_pacing_values(std::env::args_os()))
    }

    /// Parse `args`, program name first
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(attach_pacing_values(args))
    }

    /// The pacing options as raw text, `None` where absent
    #[must_use]
    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            focus: self.focus.clone().flatten(),
            break_minutes: self.break_minutes.clone().flatten(),
            cycles: self.cycles.clone().flatten(),
            pace: self.pace.clone().flatten(),
        }
    }
}

/// Join each pacing flag to the token after it (`--focus -abc` becomes
/// `--focus=-abc`) unless that token starts with `--`.
///
/// clap would otherwise read `-abc` as a cluster of short flags. Tokens after
/// a bare `--` are left alone.
pub fn attach_pacing_values<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut joined = Vec::new();

    while let Some(arg) = args.next() {
        if arg.to_str() == Some("--") {
            joined.push(arg);
            joined.extend(args);
            break;
        }

        let is_pacing = arg.to_str().is_some_and(|flag| PACING_FLAGS.contains(&flag));
        let value = if is_pacing {
            args.next_if(|next| !next.to_string_lossy().starts_with("--"))
        } else {
            None
        };

        match value {
            Some(value) => {
                let mut pair = arg;
                pair.push("=");
                pair.push(value);
                joined.push(pair);
            }
            None => joined.push(arg),
        }
    }

    joined
}
