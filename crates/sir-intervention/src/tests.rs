//! Unit tests for sir-intervention.

use sir_agent::{Agent, Population};
use sir_core::{AgentId, Bounds, Vec2};

const WORLD: Bounds = Bounds { width: 100.0, height: 100.0 };

/// Agents at the given positions, all moving with velocity (1, -1).
fn population_at(positions: &[(f64, f64)]) -> Population {
    let agents = positions
        .iter()
        .map(|&(x, y)| Agent::new(Vec2::new(x, y), Vec2::new(1.0, -1.0), 1.0))
        .collect();
    Population::from_agents(agents, WORLD).unwrap()
}

fn spread(n: usize) -> Population {
    let positions: Vec<(f64, f64)> = (0..n).map(|i| (i as f64 * 5.0 % 100.0, 50.0)).collect();
    population_at(&positions)
}

#[cfg(test)]
mod vaccination {
    use sir_core::{Cadence, SimRng};

    use super::*;
    use crate::{boost, vaccinate, Intervention, Vaccination};

    #[test]
    fn scales_susceptibility_once() {
        let mut pop = spread(4);
        assert_eq!(vaccinate(&mut pop, 0.75).unwrap(), 4);
        assert!(pop.agents().all(|(_, a)| a.susceptibility == 0.25 && a.vaccinated));

        // Second pass skips vaccinated agents.
        assert_eq!(vaccinate(&mut pop, 0.75).unwrap(), 0);
        assert!(pop.agents().all(|(_, a)| a.susceptibility == 0.25));
    }

    #[test]
    fn boosters_compound() {
        let mut pop = spread(3);
        vaccinate(&mut pop, 0.5).unwrap();
        assert_eq!(boost(&mut pop, 0.5).unwrap(), 3);
        assert_eq!(boost(&mut pop, 0.5).unwrap(), 3);
        assert!(pop.agents().all(|(_, a)| a.susceptibility == 0.125 && a.vaccinated));
    }

    #[test]
    fn cadence_selects_dose_rule() {
        let mut rng = SimRng::new(0);
        let once = Vaccination::new(0.5, Cadence::Once).unwrap();
        let continuous = Vaccination::new(0.5, Cadence::Continuous).unwrap();

        let mut a = spread(2);
        let mut b = spread(2);
        for _ in 0..3 {
            once.apply(&mut a, &mut rng).unwrap();
            continuous.apply(&mut b, &mut rng).unwrap();
        }
        assert!(a.agents().all(|(_, x)| x.susceptibility == 0.5));
        assert!(b.agents().all(|(_, x)| x.susceptibility == 0.125));
    }

    #[test]
    fn does_not_touch_health_state() {
        let mut pop = spread(3);
        pop.agent_mut(AgentId(1)).unwrap().infect();
        let before = pop.counts();
        Vaccination::new(1.0, Cadence::Continuous)
            .unwrap()
            .apply(&mut pop, &mut SimRng::new(0))
            .unwrap();
        assert_eq!(pop.counts(), before);
    }

    #[test]
    fn rejects_bad_effectiveness() {
        assert!(Vaccination::new(-0.1, Cadence::Once).is_err());
        assert!(Vaccination::new(1.01, Cadence::Once).is_err());
    }
}

#[cfg(test)]
mod lockdown {
    use sir_core::{SirError, Vec2};

    use super::*;
    use crate::{lockdown, Lockdown};

    #[test]
    fn full_lockdown_stops_everyone() {
        let mut pop = spread(5);
        lockdown(&mut pop, 1.0).unwrap();
        assert!(pop.agents().all(|(_, a)| a.velocity == Vec2::ZERO));
        // Applying it again keeps everyone stopped.
        lockdown(&mut pop, 1.0).unwrap();
        assert!(pop.agents().all(|(_, a)| a.velocity == Vec2::ZERO));
    }

    #[test]
    fn partial_lockdown_is_multiplicative() {
        let mut pop = spread(2);
        lockdown(&mut pop, 0.5).unwrap();
        lockdown(&mut pop, 0.5).unwrap();
        let v = pop.agent(AgentId(0)).unwrap().velocity;
        assert_eq!(v, Vec2::new(0.25, -0.25));
    }

    #[test]
    fn empty_population_rejected() {
        let mut pop = Population::new(WORLD);
        assert!(matches!(lockdown(&mut pop, 0.5), Err(SirError::InvalidArgument(_))));
        assert!(Lockdown::new(2.0).is_err());
    }
}

#[cfg(test)]
mod masking {
    use super::*;
    use crate::mask_wearing;

    #[test]
    fn sets_factor_absolutely() {
        let mut pop = spread(3);
        assert_eq!(mask_wearing(&mut pop, 0.6).unwrap(), 3);
        assert_eq!(mask_wearing(&mut pop, 0.6).unwrap(), 0);
        assert!(pop.agents().all(|(_, a)| (a.mask_factor - 0.4).abs() < 1e-12));
    }

    #[test]
    fn never_cures() {
        let mut pop = spread(2);
        pop.agent_mut(AgentId(0)).unwrap().infect();
        mask_wearing(&mut pop, 1.0).unwrap();
        assert!(pop.agent(AgentId(0)).unwrap().is_infected());
    }
}

#[cfg(test)]
mod distancing {
    use super::*;
    use crate::social_distance;

    #[test]
    fn pushes_close_pair_apart_to_threshold() {
        let mut pop = population_at(&[(50.0, 50.0), (54.0, 50.0)]);
        assert_eq!(social_distance(&mut pop, 10.0).unwrap(), 1);
        let a = pop.agent(AgentId(0)).unwrap().position;
        let b = pop.agent(AgentId(1)).unwrap().position;
        assert!((a.x - 47.0).abs() < 1e-9);
        assert!((b.x - 57.0).abs() < 1e-9);
        assert!((a.distance(b) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn leaves_distant_pairs_alone() {
        let mut pop = population_at(&[(10.0, 10.0), (90.0, 90.0)]);
        assert_eq!(social_distance(&mut pop, 10.0).unwrap(), 0);
        assert_eq!(pop.agent(AgentId(0)).unwrap().position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn axis_blocked_at_boundary() {
        // Pushing apart along x would move agent 0 below zero.
        let mut pop = population_at(&[(1.0, 50.0), (3.0, 50.0)]);
        social_distance(&mut pop, 10.0).unwrap();
        assert_eq!(pop.agent(AgentId(0)).unwrap().position.x, 1.0);
        assert_eq!(pop.agent(AgentId(1)).unwrap().position.x, 3.0);
    }

    #[test]
    fn stays_in_bounds() {
        let mut pop = population_at(&[(99.0, 99.0), (99.5, 99.8), (98.0, 99.9), (0.5, 0.2)]);
        for _ in 0..20 {
            social_distance(&mut pop, 25.0).unwrap();
        }
        assert!(pop.agents().all(|(_, a)| WORLD.contains(a.position)));
    }
}

#[cfg(test)]
mod tracing {
    use sir_core::SimRng;

    use super::*;
    use crate::trace_infections;

    #[test]
    fn certain_tracing_isolates_every_case() {
        let mut pop = population_at(&[(80.0, 80.0), (90.0, 90.0), (70.0, 60.0)]);
        pop.agent_mut(AgentId(0)).unwrap().infect();
        pop.agent_mut(AgentId(2)).unwrap().infect();

        let mut rng = SimRng::new(11);
        let isolated = trace_infections(&mut pop, 1.0, 10.0, &mut rng).unwrap();
        assert_eq!(isolated, 2);
        for id in [AgentId(0), AgentId(2)] {
            let p = pop.agent(id).unwrap().position;
            assert!(p.x < 10.0 && p.y < 10.0, "{id} not isolated: {p}");
        }
        assert_eq!(pop.agent(AgentId(1)).unwrap().position, Vec2::new(90.0, 90.0));
    }

    #[test]
    fn zero_probability_does_nothing() {
        let mut pop = population_at(&[(80.0, 80.0)]);
        pop.agent_mut(AgentId(0)).unwrap().infect();
        let isolated = trace_infections(&mut pop, 0.0, 10.0, &mut SimRng::new(1)).unwrap();
        assert_eq!(isolated, 0);
        assert_eq!(pop.agent(AgentId(0)).unwrap().position, Vec2::new(80.0, 80.0));
    }

    #[test]
    fn infected_contacts_follow_the_case() {
        let mut pop = population_at(&[(80.0, 80.0), (60.0, 60.0), (40.0, 40.0)]);
        pop.agent_mut(AgentId(0)).unwrap().infect();
        pop.agent_mut(AgentId(1)).unwrap().infect();
        {
            let case = pop.agent_mut(AgentId(0)).unwrap();
            case.contacts.insert(AgentId(1));
            case.contacts.insert(AgentId(2));
        }
        // Agent 1 is isolated as a contact of agent 0 and again on its own turn.
        let isolated = trace_infections(&mut pop, 1.0, 5.0, &mut SimRng::new(4)).unwrap();
        assert_eq!(isolated, 3);
        assert!(pop.agent(AgentId(0)).unwrap().contacts.is_empty());
        // Susceptible contact stays where it was.
        assert_eq!(pop.agent(AgentId(2)).unwrap().position, Vec2::new(40.0, 40.0));
        let p1 = pop.agent(AgentId(1)).unwrap().position;
        assert!(p1.x < 5.0 && p1.y < 5.0);
    }

    #[test]
    fn isolation_clipped_to_world() {
        let small = Bounds::new(3.0, 2.0);
        let mut agent = Agent::new(Vec2::new(1.0, 1.0), Vec2::ZERO, 1.0);
        agent.infect();
        let mut pop = Population::from_agents(vec![agent], small).unwrap();
        trace_infections(&mut pop, 1.0, 50.0, &mut SimRng::new(2)).unwrap();
        assert!(small.contains(pop.agent(AgentId(0)).unwrap().position));
    }
}

#[cfg(test)]
mod workforce {
    use sir_core::{SimRng, Vec2};

    use super::*;
    use crate::{remote_work, staggered_work_hours};

    fn halved(pop: &Population) -> usize {
        pop.agents().filter(|(_, a)| a.velocity == Vec2::new(0.5, -0.5)).count()
    }

    #[test]
    fn staggered_hours_halves_exact_fraction() {
        let mut pop = spread(10);
        let n = staggered_work_hours(&mut pop, 0.3, &mut SimRng::new(8)).unwrap();
        assert_eq!(n, 3);
        assert_eq!(halved(&pop), 3);
    }

    #[test]
    fn staggered_hours_full_and_none() {
        let mut pop = spread(4);
        assert_eq!(staggered_work_hours(&mut pop, 0.0, &mut SimRng::new(1)).unwrap(), 0);
        assert_eq!(staggered_work_hours(&mut pop, 1.0, &mut SimRng::new(1)).unwrap(), 4);
        assert_eq!(halved(&pop), 4);
    }

    #[test]
    fn remote_work_subset_is_distinct() {
        let mut pop = spread(20);
        let n = remote_work(&mut pop, 1.0, &mut SimRng::new(21)).unwrap();
        assert!(n < 20);
        let stopped = pop.agents().filter(|(_, a)| a.velocity == Vec2::ZERO).count();
        assert_eq!(stopped, n);
    }

    #[test]
    fn remote_work_rejects_empty() {
        let mut pop = Population::new(WORLD);
        assert!(remote_work(&mut pop, 0.5, &mut SimRng::new(0)).is_err());
    }
}

#[cfg(test)]
mod factory {
    use sir_core::{Cadence, InterventionSpec};

    use crate::from_spec;

    #[test]
    fn builds_every_kind() {
        let specs = [
            InterventionSpec::Vaccination { effectiveness: 0.5, cadence: Cadence::Once },
            InterventionSpec::Lockdown { factor: 0.5 },
            InterventionSpec::Masking { effectiveness: 0.5 },
            InterventionSpec::SocialDistancing { threshold: 25.0 },
            InterventionSpec::InfectionTracing { probability: 0.5, isolation_size: 100.0 },
            InterventionSpec::StaggeredHours { fraction: 0.5 },
            InterventionSpec::RemoteWork { factor: 0.5 },
        ];
        for spec in &specs {
            let built = from_spec(spec).unwrap();
            assert_eq!(built.name(), spec.kind());
            assert_eq!(built.cadence(), spec.cadence());
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(from_spec(&InterventionSpec::Masking { effectiveness: 3.0 }).is_err());
        assert!(from_spec(&InterventionSpec::InfectionTracing {
            probability:    0.5,
            isolation_size: -1.0,
        })
        .is_err());
    }
}
