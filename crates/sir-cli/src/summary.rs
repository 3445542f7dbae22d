//! End-of-run summary written next to the CSV files.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use sir_agent::SirCounts;
use sir_sim::SirHistory;

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub seed:                u64,
    pub ticks:               u64,
    pub population:          usize,
    pub interventions:       Vec<&'static str>,
    pub final_counts:        SirCounts,
    pub peak_infected:       usize,
    pub peak_tick:           u64,
    pub mean_infection_rate: Option<f64>,
    pub attack_rate:         Option<f64>,
    pub elapsed_secs:        f64,
}

impl RunSummary {
    pub fn from_history(
        seed:          u64,
        interventions: Vec<&'static str>,
        history:       &SirHistory,
        elapsed_secs:  f64,
    ) -> Self {
        let final_counts = history.last().unwrap_or_default();
        let (peak_tick, peak_infected) = history
            .peak_infected()
            .map(|(t, n)| (t.0, n))
            .unwrap_or_default();
        Self {
            seed,
            ticks: history.len().saturating_sub(1) as u64,
            population: final_counts.total(),
            interventions,
            final_counts,
            peak_infected,
            peak_tick,
            mean_infection_rate: history.mean_infection_rate(),
            attack_rate: history.attack_rate(),
            elapsed_secs,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
