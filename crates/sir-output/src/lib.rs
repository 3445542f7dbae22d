//! `sir-output` — simulation output writers for the rust_sir simulator.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `tick_summaries.csv`, `agent_snapshots.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sir_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sir_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
