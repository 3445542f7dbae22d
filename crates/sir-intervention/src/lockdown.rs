//! Lockdown: everyone moves slower.

use sir_agent::Population;
use sir_core::{Cadence, InterventionSpec, SimRng, SirResult};

use crate::Intervention;

/// Multiply every agent's velocity by `1 - factor`.
///
/// Multiplicative: applying `factor = 0.5` twice leaves a quarter of the
/// original speed, while `factor = 1.0` stops everyone and stays stopped.
pub fn lockdown(population: &mut Population, factor: f64) -> SirResult<usize> {
    population.ensure_not_empty("lockdown")?;
    let scale = 1.0 - factor;
    let mut changed = 0;
    for (_, agent) in population.agents_mut() {
        agent.velocity = agent.velocity * scale;
        changed += 1;
    }
    Ok(changed)
}

#[derive(Clone, Debug)]
pub struct Lockdown {
    factor: f64,
}

impl Lockdown {
    /// `factor` must be in `[0, 1]`.
    pub fn new(factor: f64) -> SirResult<Self> {
        InterventionSpec::Lockdown { factor }.validate()?;
        Ok(Self { factor })
    }
}

impl Intervention for Lockdown {
    fn name(&self) -> &'static str {
        "lockdown"
    }

    fn cadence(&self) -> Cadence {
        Cadence::Once
    }

    fn apply(&self, population: &mut Population, _rng: &mut SimRng) -> SirResult<usize> {
        lockdown(population, self.factor)
    }
}
