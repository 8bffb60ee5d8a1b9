//! JSON Lines event output
//!
//! Writes each session event as one JSON object per line, for piping into
//! other tools.

use std::io::Write;

use anyhow::{Context, Result};

use crate::session::{EventSink, SessionEvent};

/// Serialises session events as JSON Lines
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl JsonLinesSink<std::io::Stdout> {
    /// Write events to stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Write events to any writer
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn emit(&mut self, event: &SessionEvent) -> Result<()> {
        let json = serde_json::to_string(event).context("Failed to serialize session event")?;
        writeln!(self.out, "{json}").context("Failed to write session event")?;
        self.out.flush().context("Failed to flush session event")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Orchestrator;
    use crate::options::Configuration;
    use crate::timer::NoopWaiter;

    #[tokio::test]
    async fn test_one_json_object_per_event() {
        let config = Configuration {
            focus_minutes: 2.0,
            break_minutes: 1.0,
            cycles: 2,
            pace_seconds: 1.0,
        };
        let mut sink = JsonLinesSink::new(Vec::new());
        Orchestrator::new(config).run(&NoopWaiter, &mut sink).await.unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        // session + 3 x (start, end) + 5 steps + finish
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0]["event"], "session_started");
        assert_eq!(lines[0]["config"]["cycles"], 2);
        assert_eq!(lines[1]["event"], "block_started");
        assert_eq!(lines[1]["fact"]["region"], "Lofoten");
        assert_eq!(lines[2]["event"], "step");
        assert_eq!(lines[2]["remaining_after_step"], 1);
        assert_eq!(lines[12]["event"], "session_finished");
        assert_eq!(lines[12]["summary"]["break_blocks"], 1);
    }
}
