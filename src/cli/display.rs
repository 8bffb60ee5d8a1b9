//! Rich terminal display for focus sessions
//!
//! Renders session events as colored, line-oriented narration on stdout.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::coast::Fact;
use crate::options::Configuration;
use crate::session::{EventSink, SessionEvent, SessionSummary};
use crate::timer::{BlockKind, StepEvent};

/// Human-readable narration of a session
pub struct SessionDisplay<W: Write> {
    out: W,
}

impl SessionDisplay<std::io::Stdout> {
    /// Narrate to stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> SessionDisplay<W> {
    /// Narrate to any writer
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the display, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_banner(&mut self, config: &Configuration) -> Result<()> {
        writeln!(self.out, "\n{}", "Fjord Focus Coach".bold().cyan())?;
        writeln!(
            self.out,
            "{}",
            "Minimalistic timer that pairs breaths with coastline stats.".dimmed()
        )?;
        writeln!(
            self.out,
            "  {} {} cycles | focus {} min | break {} min | {}s per minute",
            "Plan:".dimmed(),
            config.cycles,
            config.focus_minutes,
            config.break_minutes,
            config.pace_seconds
        )?;
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn print_block_header(
        &mut self,
        cycle: u32,
        total_cycles: u32,
        kind: BlockKind,
        minutes: f64,
        total_steps: u64,
        interval_seconds: f64,
        fact: Option<&Fact>,
    ) -> Result<()> {
        let title = format!("Cycle {cycle}/{total_cycles}: {kind} {minutes} min");
        let title = match kind {
            BlockKind::Focus => title.bold().cyan(),
            BlockKind::Break => title.bold().yellow(),
        };
        writeln!(self.out, "\n{} {}", "===".bold(), title)?;
        writeln!(
            self.out,
            "  {} {total_steps} x {interval_seconds:.1}s",
            "Steps:".dimmed()
        )?;
        if let Some(fact) = fact {
            writeln!(
                self.out,
                "  {} {} km of shoreline",
                fact.region.bold(),
                fact.shoreline_km
            )?;
            writeln!(self.out, "  {} {}", "Breathe:".dimmed(), fact.breath_cue.italic())?;
        }
        writeln!(self.out, "{}", "─".repeat(50).dimmed())?;
        Ok(())
    }

    fn print_block_finished(&mut self, cycle: u32, kind: BlockKind, steps: u64) -> Result<()> {
        writeln!(
            self.out,
            "  {} {kind} block of cycle {cycle} complete ({steps} steps)",
            "✓".green().bold()
        )?;
        Ok(())
    }

    fn print_summary(&mut self, summary: &SessionSummary) -> Result<()> {
        writeln!(self.out, "{}", "─".repeat(50).dimmed())?;
        writeln!(
            self.out,
            "  {} {} cycles",
            "COMPLETED".green().bold(),
            summary.cycles
        )?;
        writeln!(
            self.out,
            "  {} {} focus | {} break | {} steps | {}",
            "Stats:".dimmed(),
            summary.focus_blocks,
            summary.break_blocks,
            summary.steps,
            format_elapsed(summary.elapsed())
        )?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> EventSink for SessionDisplay<W> {
    fn emit(&mut self, event: &SessionEvent) -> Result<()> {
        let written = match event {
            SessionEvent::SessionStarted { config, .. } => self.print_banner(config),
            SessionEvent::BlockStarted {
                cycle,
                total_cycles,
                kind,
                minutes,
                total_steps,
                interval_seconds,
                fact,
            } => self.print_block_header(
                *cycle,
                *total_cycles,
                *kind,
                *minutes,
                *total_steps,
                *interval_seconds,
                fact.as_ref(),
            ),
            SessionEvent::Step { step, .. } => {
                writeln!(self.out, "{}", format_step(step)).map_err(Into::into)
            }
            SessionEvent::BlockFinished { cycle, kind, steps } => {
                self.print_block_finished(*cycle, *kind, *steps)
            }
            SessionEvent::SessionFinished { summary } => self.print_summary(summary),
        };
        written.context("Failed to write session output")?;

        self.out.flush().context("Failed to flush session output")
    }
}

/// Render one step as a single line
#[must_use]
pub fn format_step(step: &StepEvent) -> String {
    let width = step.total_steps.to_string().len();
    let counter = format!(
        "[{:>width$}/{}]",
        step.step_index,
        step.total_steps,
        width = width
    );
    let counter = match step.block_kind {
        BlockKind::Focus => counter.blue(),
        BlockKind::Break => counter.yellow(),
    };
    format!(
        "  {counter} {} {}",
        step.cue,
        format!("({} min left)", step.remaining_after_step).dimmed()
    )
}

/// Format elapsed wall-clock time as `Xm Ys`
#[must_use]
pub fn format_elapsed(elapsed: chrono::Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!("{}m {}s", secs / 60, secs % 60)
}
