//! Workplace levers that slow down a random subset of agents.

use sir_agent::Population;
use sir_core::{Cadence, InterventionSpec, SimRng, SirResult};

use crate::Intervention;

/// Halve the velocity of `floor(n × fraction)` distinct agents chosen
/// uniformly at random.
pub fn staggered_work_hours(
    population: &mut Population,
    fraction:   f64,
    rng:        &mut SimRng,
) -> SirResult<usize> {
    population.ensure_not_empty("staggered work hours")?;
    let n = population.len();
    let amount = (n as f64 * fraction).floor() as usize;
    Ok(scale_random_subset(population, amount, 0.5, rng))
}

/// Scale the velocity of a random subset of agents by `1 - factor`.
///
/// The subset size is `floor(u × n)` for `u ~ U[0, 1)`, so on average half
/// the workforce goes remote; members are distinct.
pub fn remote_work(
    population: &mut Population,
    factor:     f64,
    rng:        &mut SimRng,
) -> SirResult<usize> {
    population.ensure_not_empty("remote work")?;
    let n = population.len();
    let amount = (rng.unit() * n as f64).floor() as usize;
    Ok(scale_random_subset(population, amount, 1.0 - factor, rng))
}

fn scale_random_subset(
    population: &mut Population,
    amount:     usize,
    scale:      f64,
    rng:        &mut SimRng,
) -> usize {
    let ids = population.ids();
    let picked = rng.sample_indices(ids.len(), amount);
    for &i in &picked {
        if let Some(agent) = population.agent_mut(ids[i]) {
            agent.velocity = agent.velocity * scale;
        }
    }
    picked.len()
}

#[derive(Clone, Debug)]
pub struct StaggeredHours {
    fraction: f64,
}

impl StaggeredHours {
    /// `fraction` must be in `[0, 1]`.
    pub fn new(fraction: f64) -> SirResult<Self> {
        InterventionSpec::StaggeredHours { fraction }.validate()?;
        Ok(Self { fraction })
    }
}

impl Intervention for StaggeredHours {
    fn name(&self) -> &'static str {
        "staggered_hours"
    }

    fn cadence(&self) -> Cadence {
        Cadence::Once
    }

    fn apply(&self, population: &mut Population, rng: &mut SimRng) -> SirResult<usize> {
        staggered_work_hours(population, self.fraction, rng)
    }
}

#[derive(Clone, Debug)]
pub struct RemoteWork {
    factor: f64,
}

impl RemoteWork {
    /// `factor` must be in `[0, 1]`.
    pub fn new(factor: f64) -> SirResult<Self> {
        InterventionSpec::RemoteWork { factor }.validate()?;
        Ok(Self { factor })
    }
}

impl Intervention for RemoteWork {
    fn name(&self) -> &'static str {
        "remote_work"
    }

    fn cadence(&self) -> Cadence {
        Cadence::Once
    }

    fn apply(&self, population: &mut Population, rng: &mut SimRng) -> SirResult<usize> {
        remote_work(population, self.factor, rng)
    }
}
