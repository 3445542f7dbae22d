//! Vaccination: lowers each agent's susceptibility.

use sir_agent::Population;
use sir_core::{Cadence, InterventionSpec, SimRng, SirResult};

use crate::Intervention;

/// Scale the susceptibility of every not-yet-vaccinated agent by
/// `1 - effectiveness` and mark it vaccinated.  Already vaccinated agents
/// are skipped.
pub fn vaccinate(population: &mut Population, effectiveness: f64) -> SirResult<usize> {
    population.ensure_not_empty("vaccination")?;
    let scale = 1.0 - effectiveness;
    let mut changed = 0;
    for (_, agent) in population.agents_mut() {
        if agent.vaccinated {
            continue;
        }
        agent.susceptibility *= scale;
        agent.vaccinated = true;
        changed += 1;
    }
    Ok(changed)
}

/// Give every agent another dose: susceptibility is scaled by
/// `1 - effectiveness` whether or not the agent was vaccinated before, so
/// repeated passes compound.
pub fn boost(population: &mut Population, effectiveness: f64) -> SirResult<usize> {
    population.ensure_not_empty("vaccination")?;
    let scale = 1.0 - effectiveness;
    let mut changed = 0;
    for (_, agent) in population.agents_mut() {
        agent.susceptibility *= scale;
        agent.vaccinated = true;
        changed += 1;
    }
    Ok(changed)
}

/// `Once` vaccinates at build time via [`vaccinate`]; `Continuous` runs
/// [`boost`] at the end of every tick.
#[derive(Clone, Debug)]
pub struct Vaccination {
    effectiveness: f64,
    cadence:       Cadence,
}

impl Vaccination {
    /// `effectiveness` must be in `[0, 1]`.
    pub fn new(effectiveness: f64, cadence: Cadence) -> SirResult<Self> {
        InterventionSpec::Vaccination { effectiveness, cadence }.validate()?;
        Ok(Self { effectiveness, cadence })
    }
}

impl Intervention for Vaccination {
    fn name(&self) -> &'static str {
        "vaccination"
    }

    fn cadence(&self) -> Cadence {
        self.cadence
    }

    fn apply(&self, population: &mut Population, _rng: &mut SimRng) -> SirResult<usize> {
        match self.cadence {
            Cadence::Once       => vaccinate(population, self.effectiveness),
            Cadence::Continuous => boost(population, self.effectiveness),
        }
    }
}
