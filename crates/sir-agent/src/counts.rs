//! Aggregate S/I/R tallies.

use std::fmt;

use crate::HealthState;

/// Number of agents in each state.  `total()` always equals the population
/// size; the simulator checks this every tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SirCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl SirCounts {
    /// Count one agent in `state`.
    #[inline]
    pub fn tally(&mut self, state: HealthState) {
        match state {
            HealthState::Susceptible => self.susceptible += 1,
            HealthState::Infected    => self.infected += 1,
            HealthState::Recovered   => self.recovered += 1,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }

    /// Count for a single state.
    pub fn get(&self, state: HealthState) -> usize {
        match state {
            HealthState::Susceptible => self.susceptible,
            HealthState::Infected    => self.infected,
            HealthState::Recovered   => self.recovered,
        }
    }
}

impl FromIterator<HealthState> for SirCounts {
    fn from_iter<I: IntoIterator<Item = HealthState>>(iter: I) -> Self {
        let mut counts = SirCounts::default();
        for state in iter {
            counts.tally(state);
        }
        counts
    }
}

impl fmt::Display for SirCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S={} I={} R={}", self.susceptible, self.infected, self.recovered)
    }
}
