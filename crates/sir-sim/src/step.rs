//! The per-tick phases, as free functions over a [`Population`].
//!
//! [`Sim::step`][crate::Sim::step] calls these in order.  They are public so
//! tests and custom drivers can run a single phase in isolation.

use rustc_hash::FxHashSet;

use sir_agent::{HealthState, Population};
use sir_core::{AgentId, SimRng};

/// Move every agent one tick, reflecting off the world edges.
///
/// Returns the number of wall bounces.
pub fn move_agents(population: &mut Population) -> usize {
    let bounds = population.bounds();
    population
        .agents_mut()
        .map(|(_, agent)| agent.advance(bounds).iter().filter(|&&b| b).count())
        .sum()
}

/// Find every pair closer than `radius`.
///
/// Sets `ContactEdge::in_range` on every edge, records each pair in both
/// agents' contact sets, and returns the pairs in edge order.
pub fn resolve_contacts(population: &mut Population, radius: f64) -> Vec<(AgentId, AgentId)> {
    let pairs: Vec<(AgentId, AgentId)> = population.graph().edge_pairs().collect();
    let in_range = contact_flags(population, &pairs, radius);

    for ((_, _, edge), &close) in population.graph_mut().edges_mut().zip(&in_range) {
        edge.in_range = close;
    }

    let contacts: Vec<(AgentId, AgentId)> = pairs
        .into_iter()
        .zip(in_range)
        .filter_map(|(pair, close)| close.then_some(pair))
        .collect();

    for &(a, b) in &contacts {
        if let Some(agent) = population.agent_mut(a) {
            agent.contacts.insert(b);
        }
        if let Some(agent) = population.agent_mut(b) {
            agent.contacts.insert(a);
        }
    }
    contacts
}

#[cfg(not(feature = "parallel"))]
fn contact_flags(population: &Population, pairs: &[(AgentId, AgentId)], radius: f64) -> Vec<bool> {
    pairs
        .iter()
        .map(|&(a, b)| within(population, a, b, radius))
        .collect()
}

#[cfg(feature = "parallel")]
fn contact_flags(population: &Population, pairs: &[(AgentId, AgentId)], radius: f64) -> Vec<bool> {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|&(a, b)| within(population, a, b, radius))
        .collect()
}

#[inline]
fn within(population: &Population, a: AgentId, b: AgentId, radius: f64) -> bool {
    match (population.agent(a), population.agent(b)) {
        (Some(x), Some(y)) => x.position.distance(y.position) < radius,
        _ => false,
    }
}

/// Roll transmission for every contact pair with exactly one infected end.
///
/// Reads states as they stood when the phase began; infections are committed
/// only after every pair has been considered, so an agent infected here cannot
/// pass it on in the same tick.  Draws happen in `contacts` order, one per
/// eligible pair, and a target already hit this tick is skipped without a
/// draw.
///
/// Returns the newly infected ids in infection order.
pub fn transmit(
    population:  &mut Population,
    contacts:    &[(AgentId, AgentId)],
    probability: f64,
    rng:         &mut SimRng,
) -> Vec<AgentId> {
    let mut hit: FxHashSet<AgentId> = FxHashSet::default();
    let mut newly_infected = Vec::new();

    for &(a, b) in contacts {
        let (Some(x), Some(y)) = (population.agent(a), population.agent(b)) else {
            continue;
        };
        let (source, target, target_id) = match (x.state(), y.state()) {
            (HealthState::Infected, HealthState::Susceptible) => (x, y, b),
            (HealthState::Susceptible, HealthState::Infected) => (y, x, a),
            _ => continue,
        };
        if hit.contains(&target_id) {
            continue;
        }

        let p = probability * target.susceptibility * target.mask_factor * source.mask_factor;
        if rng.unit() < p {
            hit.insert(target_id);
            newly_infected.push(target_id);
        }
    }

    for &id in &newly_infected {
        if let Some(agent) = population.agent_mut(id) {
            agent.infect();
        }
    }
    newly_infected
}

/// Advance every infected agent's timer.  Returns the number that recovered.
pub fn progress(population: &mut Population, recovery_ticks: u32) -> usize {
    population
        .agents_mut()
        .filter(|(_, agent)| agent.is_infected())
        .map(|(_, agent)| agent.progress(recovery_ticks))
        .filter(|&recovered| recovered)
        .count()
}
