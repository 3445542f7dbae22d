//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sir_agent::{Population, SirCounts};
use sir_core::Tick;
use sir_sim::{SimObserver, StepReport};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row every tick and agent rows at
/// every snapshot.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &StepReport) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(report));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        let rows: Vec<AgentSnapshotRow> = population
            .agents()
            .map(|(id, agent)| AgentSnapshotRow {
                agent_id: id.0,
                tick:     tick.0,
                x:        agent.position.x,
                y:        agent.position.y,
                state:    agent.state(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _counts: SirCounts) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
