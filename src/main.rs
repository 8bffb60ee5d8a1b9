//! Fjord Focus - breathing and focus timer
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use fjord_focus::cli::{Cli, JsonLinesSink, OutputFormat, SessionDisplay};
use fjord_focus::{
    Configuration, Defaults, EventSink, FocusConfig, NoopWaiter, Orchestrator, SessionSummary,
    TokioWaiter,
};

/// Prefix for the diagnostic printed when a session fails
const FAILURE_PREFIX: &str = "fjord-focus failed:";

/// How the session suspends between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pacing {
    /// Sleep the full interval, ignoring Ctrl-C handling
    RealTime,
    /// Sleep, but stop the session on Ctrl-C
    Interruptible,
    /// Do not sleep at all
    DryRun,
}

impl Pacing {
    const fn from_cli(cli: &Cli) -> Self {
        if cli.dry_run {
            Self::DryRun
        } else if cli.interruptible {
            Self::Interruptible
        } else {
            Self::RealTime
        }
    }
}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so stdout stays the narration
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::from_env();

    if let Err(err) = run(&cli).await {
        eprintln!("{} {err:#}", FAILURE_PREFIX.red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<SessionSummary> {
    let defaults = load_defaults(cli.config.as_deref())?;
    let config = Configuration::resolve(&cli.raw_options(), &defaults);
    tracing::debug!(?config, "resolved configuration");

    let orchestrator = Orchestrator::new(config);
    let pacing = Pacing::from_cli(cli);

    match cli.format {
        OutputFormat::Text => drive(&orchestrator, pacing, &mut SessionDisplay::stdout()).await,
        OutputFormat::Json => drive(&orchestrator, pacing, &mut JsonLinesSink::stdout()).await,
    }
}

/// Built-in defaults, overridden by the config file when one is given.
fn load_defaults(path: Option<&Path>) -> Result<Defaults> {
    let Some(path) = path else {
        return Ok(Defaults::default());
    };
    let config = FocusConfig::from_path(path)
        .with_context(|| format!("Failed to load config from '{}'", path.display()))?;
    Ok(config.defaults)
}

/// Run the session with the waiter matching `pacing`.
async fn drive<S: EventSink>(
    orchestrator: &Orchestrator<'_>,
    pacing: Pacing,
    sink: &mut S,
) -> Result<SessionSummary> {
    match pacing {
        Pacing::DryRun => orchestrator.run(&NoopWaiter, sink).await,
        Pacing::RealTime => orchestrator.run(&TokioWaiter::new(), sink).await,
        Pacing::Interruptible => {
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let listener = tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("interrupt received, stopping after the current pause");
                    shutdown_tx.send(true).ok();
                }
            });

            let result = orchestrator
                .run(&TokioWaiter::with_shutdown(shutdown_rx), sink)
                .await;
            listener.abort();
            result
        }
    }
}
