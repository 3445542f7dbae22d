//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `agent_snapshots.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

pub const SUMMARY_HEADER: [&str; 7] = [
    "tick",
    "susceptible",
    "infected",
    "recovered",
    "new_infections",
    "new_recoveries",
    "contacts",
];

pub const SNAPSHOT_HEADER: [&str; 5] = ["agent_id", "tick", "x", "y", "state"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self {
            summaries,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.state.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.susceptible.to_string(),
            row.infected.to_string(),
            row.recovered.to_string(),
            row.new_infections.to_string(),
            row.new_recoveries.to_string(),
            row.contacts.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
