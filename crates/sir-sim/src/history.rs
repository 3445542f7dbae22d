//! Per-tick S/I/R time series.

use sir_agent::SirCounts;
use sir_core::Tick;

use crate::{SimObserver, StepReport};

/// An observer that records the counts after every tick.
///
/// Seed it with the pre-run counts (`SirHistory::new(sim.counts())`) so the
/// series starts at tick 0.
#[derive(Clone, Debug, Default)]
pub struct SirHistory {
    counts: Vec<SirCounts>,
}

impl SirHistory {
    pub fn new(initial: SirCounts) -> Self {
        Self { counts: vec![initial] }
    }

    /// Recorded counts, oldest first.
    pub fn counts(&self) -> &[SirCounts] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn last(&self) -> Option<SirCounts> {
        self.counts.last().copied()
    }

    pub fn susceptible(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.susceptible).collect()
    }

    pub fn infected(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.infected).collect()
    }

    pub fn recovered(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.recovered).collect()
    }

    /// Mean change of the infected count per recorded step.
    ///
    /// `None` with fewer than two entries.
    pub fn mean_infection_rate(&self) -> Option<f64> {
        if self.counts.len() < 2 {
            return None;
        }
        let first = self.counts[0].infected as f64;
        let last = self.counts[self.counts.len() - 1].infected as f64;
        Some((last - first) / (self.counts.len() - 1) as f64)
    }

    /// Index (tick, if seeded at tick 0) and size of the largest infected
    /// count.  Ties resolve to the earliest.
    pub fn peak_infected(&self) -> Option<(Tick, usize)> {
        self.counts
            .iter()
            .enumerate()
            .fold(None, |best, (i, c)| match best {
                Some((_, peak)) if peak >= c.infected => best,
                _ => Some((Tick(i as u64), c.infected)),
            })
    }

    /// Share of the population ever infected, as of the last entry.
    pub fn attack_rate(&self) -> Option<f64> {
        let last = self.counts.last()?;
        let total = last.total();
        (total > 0).then(|| (last.infected + last.recovered) as f64 / total as f64)
    }
}

impl SimObserver for SirHistory {
    fn on_tick_end(&mut self, report: &StepReport) {
        self.counts.push(report.counts);
    }
}
