//! Social distancing: agents that get too close step apart.

use sir_agent::Population;
use sir_core::{AgentId, Cadence, InterventionSpec, SimRng, SirResult, Vec2};

use crate::Intervention;

/// For every pair closer than `threshold`, push both agents apart along the
/// line joining them, each by half the shortfall.
///
/// Each axis is adjusted independently and only if both agents stay inside
/// the world on that axis.  Pairs are visited in edge order and see the
/// positions left by earlier pairs.  Coincident agents are pushed apart
/// along x.  Returns the number of pairs that were too close.
pub fn social_distance(population: &mut Population, threshold: f64) -> SirResult<usize> {
    population.ensure_not_empty("social distancing")?;
    let bounds = population.bounds();
    let pairs: Vec<(AgentId, AgentId)> = population.graph().edge_pairs().collect();

    let mut adjusted = 0;
    for (a, b) in pairs {
        let (Some(pa), Some(pb)) = (
            population.agent(a).map(|x| x.position),
            population.agent(b).map(|x| x.position),
        ) else {
            continue;
        };

        let distance = pa.distance(pb);
        if distance >= threshold {
            continue;
        }
        adjusted += 1;

        let angle = (pb.y - pa.y).atan2(pb.x - pa.x);
        let push = (threshold - distance) / 2.0;
        let (mx, my) = (push * angle.cos(), push * angle.sin());

        let mut na = pa;
        let mut nb = pb;
        if (0.0..=bounds.width).contains(&(pa.x - mx)) && (0.0..=bounds.width).contains(&(pb.x + mx)) {
            na.x -= mx;
            nb.x += mx;
        }
        if (0.0..=bounds.height).contains(&(pa.y - my)) && (0.0..=bounds.height).contains(&(pb.y + my)) {
            na.y -= my;
            nb.y += my;
        }
        set_position(population, a, na);
        set_position(population, b, nb);
    }
    Ok(adjusted)
}

#[inline]
fn set_position(population: &mut Population, id: AgentId, position: Vec2) {
    if let Some(agent) = population.agent_mut(id) {
        agent.position = position;
    }
}

#[derive(Clone, Debug)]
pub struct SocialDistancing {
    threshold: f64,
}

impl SocialDistancing {
    /// `threshold` must be positive.
    pub fn new(threshold: f64) -> SirResult<Self> {
        InterventionSpec::SocialDistancing { threshold }.validate()?;
        Ok(Self { threshold })
    }
}

impl Intervention for SocialDistancing {
    fn name(&self) -> &'static str {
        "social_distancing"
    }

    fn cadence(&self) -> Cadence {
        Cadence::Continuous
    }

    fn apply(&self, population: &mut Population, _rng: &mut SimRng) -> SirResult<usize> {
        social_distance(population, self.threshold)
    }
}
