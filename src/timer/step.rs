//! Step timer
//!
//! Splits a block of simulated minutes into whole steps and narrates one cue
//! per step, suspending between steps.

use std::fmt;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::coast::rotate;
use crate::timer::wait::Waiter;

/// Kind of timed block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Focused work
    Focus,
    /// Rest between focus blocks
    Break,
}

impl BlockKind {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One narrated step inside a block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepEvent {
    /// Block this step belongs to
    pub block_kind: BlockKind,
    /// 1-based position within the block
    pub step_index: u64,
    /// Number of steps in the block
    pub total_steps: u64,
    /// Cue text for this step
    pub cue: String,
    /// Steps (simulated minutes) left once this step finishes
    pub remaining_after_step: u64,
    /// Seconds the timer suspends after reporting this step
    pub interval_seconds: f64,
}

/// Step count and per-step interval for a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    /// `max(1, round(minutes))`
    pub total_steps: u64,
    /// `minutes * pace / total_steps`
    pub interval_seconds: f64,
}

impl StepPlan {
    /// Plan a block of `duration_minutes` at `pace_seconds` per minute.
    ///
    /// Durations that round to zero, or are negative, still get one step.
    /// Fails when the rounded duration has no exact `u64` step count.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn new(duration_minutes: f64, pace_seconds: f64) -> Result<Self> {
        // f64::max discards NaN, so this is always >= 1.0
        let rounded = duration_minutes.round().max(1.0);
        // u64::MAX as f64 rounds up to 2^64, the first value that does not fit
        if rounded >= u64::MAX as f64 {
            bail!("{duration_minutes} minutes is too many steps to run");
        }
        let total_steps = rounded as u64;
        let interval_seconds = (duration_minutes * pace_seconds) / total_steps as f64;
        Ok(Self {
            total_steps,
            interval_seconds,
        })
    }
}

/// Narrates one block against a cue script
#[derive(Debug, Clone, Copy)]
pub struct StepTimer<'a> {
    kind: BlockKind,
    plan: StepPlan,
    script: &'a [&'a str],
}

impl<'a> StepTimer<'a> {
    /// Create a timer for one block
    pub fn new(
        kind: BlockKind,
        duration_minutes: f64,
        pace_seconds: f64,
        script: &'a [&'a str],
    ) -> Result<Self> {
        let plan = StepPlan::new(duration_minutes, pace_seconds)
            .with_context(|| format!("Cannot plan {kind} block"))?;
        Ok(Self { kind, plan, script })
    }

    /// The computed plan
    #[must_use]
    pub const fn plan(&self) -> StepPlan {
        self.plan
    }

    /// Lazily generate the block's step events, in order, without suspending.
    pub fn steps(&self) -> impl Iterator<Item = StepEvent> + 'a {
        let Self { kind, plan, script } = *self;
        let total = plan.total_steps;
        (0..total).map(move |step| {
            let cue = usize::try_from(step)
                .ok()
                .and_then(|i| rotate(script, i))
                .copied()
                .unwrap_or_default();
            let remaining = total - step;
            StepEvent {
                block_kind: kind,
                step_index: step + 1,
                total_steps: total,
                cue: cue.to_string(),
                remaining_after_step: remaining - 1,
                interval_seconds: plan.interval_seconds,
            }
        })
    }

    /// Run the block: hand each step to `on_step`, then suspend on `waiter`.
    ///
    /// Returns the number of steps run.
    pub async fn run<W, F>(&self, waiter: &W, mut on_step: F) -> Result<u64>
    where
        W: Waiter,
        F: FnMut(&StepEvent) -> Result<()>,
    {
        let interval = Duration::try_from_secs_f64(self.plan.interval_seconds).with_context(|| {
            format!(
                "{} step interval of {}s is not a valid duration",
                self.kind, self.plan.interval_seconds
            )
        })?;

        tracing::debug!(
            kind = %self.kind,
            total_steps = self.plan.total_steps,
            interval_secs = self.plan.interval_seconds,
            "starting block"
        );

        for event in self.steps() {
            on_step(&event)?;
            waiter.wait(interval).await.with_context(|| {
                format!("{} step {} did not complete", self.kind, event.step_index)
            })?;
        }

        Ok(self.plan.total_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coast::FOCUS_SCRIPT;
    use crate::testutil::RecordingWaiter;
    use crate::timer::wait::NoopWaiter;

    #[test]
    fn test_sub_minute_block_gets_one_step() {
        let plan = StepPlan::new(0.4, 5.0).unwrap();
        assert_eq!(plan.total_steps, 1);
        assert!((plan.interval_seconds - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_whole_minutes_give_one_step_each() {
        let plan = StepPlan::new(3.0, 5.0).unwrap();
        assert_eq!(plan.total_steps, 3);
        assert!((plan.interval_seconds - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_steps_is_rounded_minutes() {
        let cases = [(1.0, 1), (1.49, 1), (1.5, 2), (2.5, 3), (25.0, 25), (90.2, 90)];
        for (minutes, expected) in cases {
            let plan = StepPlan::new(minutes, 5.0).unwrap();
            assert_eq!(plan.total_steps, expected, "minutes = {minutes}");
        }
    }

    #[test]
    fn test_zero_and_negative_durations_still_get_one_step() {
        assert_eq!(StepPlan::new(0.0, 5.0).unwrap().total_steps, 1);
        assert_eq!(StepPlan::new(-3.0, 5.0).unwrap().total_steps, 1);
        assert_eq!(StepPlan::new(f64::NAN, 5.0).unwrap().total_steps, 1);
    }

    #[test]
    fn test_step_count_above_u32_range_is_exact() {
        let plan = StepPlan::new(1e10, 5.0).unwrap();
        assert_eq!(plan.total_steps, 10_000_000_000);
        assert!((plan.interval_seconds - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_count_beyond_u64_is_an_error() {
        let err = StepPlan::new(1e20, 5.0).unwrap_err();
        assert!(err.to_string().contains("too many steps"));
        assert!(StepPlan::new(f64::INFINITY, 5.0).is_err());
    }

    #[test]
    fn test_timer_reports_unplannable_block() {
        let err = StepTimer::new(BlockKind::Break, 1e20, 5.0, &FOCUS_SCRIPT).unwrap_err();
        assert_eq!(err.to_string(), "Cannot plan Break block");
    }

    #[test]
    fn test_interval_spreads_fractional_minutes() {
        // 2.4 minutes round to 2 steps, each carrying 1.2 minutes of pace
        let plan = StepPlan::new(2.4, 60.0).unwrap();
        assert_eq!(plan.total_steps, 2);
        assert!((plan.interval_seconds - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_steps_cycle_through_script() {
        let timer = StepTimer::new(BlockKind::Focus, 3.0, 5.0, &FOCUS_SCRIPT).unwrap();
        let cues: Vec<String> = timer.steps().map(|e| e.cue).collect();
        assert_eq!(cues, vec![FOCUS_SCRIPT[0], FOCUS_SCRIPT[1], FOCUS_SCRIPT[2]]);
    }

    #[test]
    fn test_steps_wrap_script_modulo_length() {
        let script = ["in", "out"];
        let timer = StepTimer::new(BlockKind::Break, 5.0, 1.0, &script).unwrap();
        let cues: Vec<String> = timer.steps().map(|e| e.cue).collect();
        assert_eq!(cues, vec!["in", "out", "in", "out", "in"]);
    }

    #[test]
    fn test_step_indices_and_remaining_counts() {
        let timer = StepTimer::new(BlockKind::Focus, 3.0, 5.0, &FOCUS_SCRIPT).unwrap();
        let events: Vec<StepEvent> = timer.steps().collect();

        let indices: Vec<u64> = events.iter().map(|e| e.step_index).collect();
        let remaining: Vec<u64> = events.iter().map(|e| e.remaining_after_step).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(remaining, vec![2, 1, 0]);
        assert!(events.iter().all(|e| e.total_steps == 3));
        assert!(events.iter().all(|e| e.block_kind == BlockKind::Focus));
    }

    #[test]
    fn test_single_step_reports_zero_remaining() {
        let timer = StepTimer::new(BlockKind::Break, 0.4, 5.0, &FOCUS_SCRIPT).unwrap();
        let events: Vec<StepEvent> = timer.steps().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].remaining_after_step, 0);
    }

    #[tokio::test]
    async fn test_run_waits_once_per_step_after_reporting() {
        let waiter = RecordingWaiter::default();
        let timer = StepTimer::new(BlockKind::Focus, 3.0, 5.0, &FOCUS_SCRIPT).unwrap();

        let mut seen = Vec::new();
        let steps = timer
            .run(&waiter, |event| {
                // each step is reported before its own wait
                assert_eq!(waiter.waits().len(), seen.len());
                seen.push(event.step_index);
                Ok(())
            })
            .await
            .unwrap();

        assert_eq!(steps, 3);
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(waiter.waits(), vec![Duration::from_secs(5); 3]);
    }

    #[tokio::test]
    async fn test_run_stops_on_callback_error() {
        let timer = StepTimer::new(BlockKind::Focus, 3.0, 5.0, &FOCUS_SCRIPT).unwrap();
        let mut calls = 0;
        let result = timer
            .run(&NoopWaiter, |_| {
                calls += 1;
                anyhow::bail!("output closed")
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_run_rejects_unrepresentable_interval() {
        let timer = StepTimer::new(BlockKind::Focus, 1.0, f64::MAX, &FOCUS_SCRIPT).unwrap();
        let result = timer.run(&NoopWaiter, |_| Ok(())).await;
        assert!(result.unwrap_err().to_string().contains("not a valid duration"));
    }
}
