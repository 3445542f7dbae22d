//! Masking: every transmission involving a masked agent is less likely.

use sir_agent::Population;
use sir_core::{Cadence, InterventionSpec, SimRng, SirResult};

use crate::Intervention;

/// Set every agent's mask factor to `1 - effectiveness`.
///
/// This is an absolute set, so the continuous cadence is idempotent.
/// Returns the number of agents whose factor changed.
pub fn mask_wearing(population: &mut Population, effectiveness: f64) -> SirResult<usize> {
    population.ensure_not_empty("masking")?;
    let factor = 1.0 - effectiveness;
    let mut changed = 0;
    for (_, agent) in population.agents_mut() {
        if agent.mask_factor != factor {
            agent.mask_factor = factor;
            changed += 1;
        }
    }
    Ok(changed)
}

#[derive(Clone, Debug)]
pub struct Masking {
    effectiveness: f64,
}

impl Masking {
    /// `effectiveness` must be in `[0, 1]`.
    pub fn new(effectiveness: f64) -> SirResult<Self> {
        InterventionSpec::Masking { effectiveness }.validate()?;
        Ok(Self { effectiveness })
    }
}

impl Intervention for Masking {
    fn name(&self) -> &'static str {
        "masking"
    }

    fn cadence(&self) -> Cadence {
        Cadence::Continuous
    }

    fn apply(&self, population: &mut Population, _rng: &mut SimRng) -> SirResult<usize> {
        mask_wearing(population, self.effectiveness)
    }
}
