//! Cycle orchestrator
//!
//! Runs `cycles` rounds of a focus block followed by a break block. The
//! final cycle has no trailing break.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::coast::{fact_for_cycle, Fact, BREAK_SCRIPT, FACTS, FOCUS_SCRIPT};
use crate::options::Configuration;
use crate::session::event::{EventSink, SessionEvent, SessionSummary};
use crate::timer::{BlockKind, StepTimer, Waiter};

/// A block scheduled at a given cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedBlock {
    /// 1-based cycle number
    pub cycle: u32,
    /// Focus or break
    pub kind: BlockKind,
}

/// Sequences focus and break blocks for a whole session
#[derive(Debug, Clone, Copy)]
pub struct Orchestrator<'a> {
    config: Configuration,
    facts: &'a [Fact],
    focus_script: &'a [&'a str],
    break_script: &'a [&'a str],
}

impl Orchestrator<'static> {
    /// Orchestrator over the built-in coastline facts and cue scripts
    #[must_use]
    pub const fn new(config: Configuration) -> Self {
        Self::with_datasets(config, &FACTS, &FOCUS_SCRIPT, &BREAK_SCRIPT)
    }
}

impl<'a> Orchestrator<'a> {
    /// Orchestrator over caller-supplied datasets
    #[must_use]
    pub const fn with_datasets(
        config: Configuration,
        facts: &'a [Fact],
        focus_script: &'a [&'a str],
        break_script: &'a [&'a str],
    ) -> Self {
        Self {
            config,
            facts,
            focus_script,
            break_script,
        }
    }

    /// Block order: focus, break, focus, break, ..., focus.
    pub fn blocks(&self) -> impl Iterator<Item = PlannedBlock> {
        let cycles = self.config.cycles;
        (1..=cycles).flat_map(move |cycle| {
            let focus = PlannedBlock {
                cycle,
                kind: BlockKind::Focus,
            };
            let rest = (cycle != cycles).then_some(PlannedBlock {
                cycle,
                kind: BlockKind::Break,
            });
            std::iter::once(focus).chain(rest)
        })
    }

    /// Run every block in order, reporting to `sink` and suspending on `waiter`.
    pub async fn run<W, S>(&self, waiter: &W, sink: &mut S) -> Result<SessionSummary>
    where
        W: Waiter,
        S: EventSink,
    {
        let started_at = Utc::now();
        tracing::info!(
            cycles = self.config.cycles,
            focus_minutes = self.config.focus_minutes,
            break_minutes = self.config.break_minutes,
            pace_seconds = self.config.pace_seconds,
            "session started"
        );
        sink.emit(&SessionEvent::SessionStarted {
            config: self.config,
            started_at,
        })?;

        let mut summary = SessionSummary {
            started_at,
            finished_at: started_at,
            cycles: 0,
            focus_blocks: 0,
            break_blocks: 0,
            steps: 0,
        };

        for block in self.blocks() {
            let steps = self
                .run_block(block, waiter, sink)
                .await
                .with_context(|| format!("{} block of cycle {} failed", block.kind, block.cycle))?;

            summary.steps = summary.steps.saturating_add(steps);
            match block.kind {
                BlockKind::Focus => {
                    summary.focus_blocks += 1;
                    summary.cycles = block.cycle;
                }
                BlockKind::Break => summary.break_blocks += 1,
            }
        }

        summary.finished_at = Utc::now();
        tracing::info!(steps = summary.steps, "session finished");
        sink.emit(&SessionEvent::SessionFinished {
            summary: summary.clone(),
        })?;

        Ok(summary)
    }

    async fn run_block<W, S>(&self, block: PlannedBlock, waiter: &W, sink: &mut S) -> Result<u64>
    where
        W: Waiter,
        S: EventSink,
    {
        let (minutes, script, fact) = match block.kind {
            BlockKind::Focus => (
                self.config.focus_minutes,
                self.focus_script,
                fact_for_cycle(self.facts, block.cycle).copied(),
            ),
            BlockKind::Break => (self.config.break_minutes, self.break_script, None),
        };

        let timer = StepTimer::new(block.kind, minutes, self.config.pace_seconds, script)?;
        let plan = timer.plan();

        sink.emit(&SessionEvent::BlockStarted {
            cycle: block.cycle,
            total_cycles: self.config.cycles,
            kind: block.kind,
            minutes,
            total_steps: plan.total_steps,
            interval_seconds: plan.interval_seconds,
            fact,
        })?;

        let steps = timer
            .run(waiter, |step| {
                sink.emit(&SessionEvent::Step {
                    cycle: block.cycle,
                    step: step.clone(),
                })
            })
            .await?;

        sink.emit(&SessionEvent::BlockFinished {
            cycle: block.cycle,
            kind: block.kind,
            steps,
        })?;

        Ok(steps)
    }
}
