//! Infection tracing: detected cases are moved into an isolation area.

use log::trace;

use sir_agent::Population;
use sir_core::{AgentId, Cadence, InterventionSpec, SimRng, SirResult, Vec2};

use crate::Intervention;

/// Each infected agent is detected with probability `probability`.  A
/// detected agent is teleported to a uniform point in the isolation square
/// `[0, isolation_size) × [0, isolation_size)` (clipped to the world), and
/// every currently infected agent in its recorded contacts is isolated with
/// it.  The detected agent's contact list is then cleared.
///
/// Returns the number of isolations performed (an agent reached both
/// directly and through a contact is counted each time).
pub fn trace_infections(
    population:     &mut Population,
    probability:    f64,
    isolation_size: f64,
    rng:            &mut SimRng,
) -> SirResult<usize> {
    population.ensure_not_empty("infection tracing")?;
    let bounds = population.bounds();
    let side_x = isolation_size.min(bounds.width);
    let side_y = isolation_size.min(bounds.height);

    let mut isolated = 0;
    for id in population.ids() {
        let is_case = population.agent(id).is_some_and(|a| a.is_infected());
        if !is_case || rng.unit() >= probability {
            continue;
        }

        let contacts: Vec<AgentId> = match population.agent_mut(id) {
            Some(agent) => {
                let mut c: Vec<AgentId> = agent.contacts.drain().collect();
                c.sort_unstable();
                c
            }
            None => continue,
        };

        isolate(population, id, side_x, side_y, rng);
        isolated += 1;

        for contact in contacts {
            if population.agent(contact).is_some_and(|a| a.is_infected()) {
                isolate(population, contact, side_x, side_y, rng);
                isolated += 1;
            }
        }
        trace!("traced {id}");
    }
    Ok(isolated)
}

fn isolate(population: &mut Population, id: AgentId, side_x: f64, side_y: f64, rng: &mut SimRng) {
    let target = Vec2::new(rng.gen_range(0.0..side_x), rng.gen_range(0.0..side_y));
    if let Some(agent) = population.agent_mut(id) {
        agent.position = target;
    }
}

#[derive(Clone, Debug)]
pub struct InfectionTracing {
    probability:    f64,
    isolation_size: f64,
}

impl InfectionTracing {
    /// `probability` in `[0, 1]`, `isolation_size` positive.
    pub fn new(probability: f64, isolation_size: f64) -> SirResult<Self> {
        InterventionSpec::InfectionTracing { probability, isolation_size }.validate()?;
        Ok(Self { probability, isolation_size })
    }
}

impl Intervention for InfectionTracing {
    fn name(&self) -> &'static str {
        "infection_tracing"
    }

    fn cadence(&self) -> Cadence {
        Cadence::Continuous
    }

    fn apply(&self, population: &mut Population, rng: &mut SimRng) -> SirResult<usize> {
        trace_infections(population, self.probability, self.isolation_size, rng)
    }
}
