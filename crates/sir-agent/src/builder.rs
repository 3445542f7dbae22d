//! Fluent builder for a randomly placed population with one seeded infection.
//!
//! # Usage
//!
//! ```rust
//! use sir_agent::PopulationBuilder;
//! use sir_core::{Bounds, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(50, Bounds::new(800.0, 600.0))
//!     .max_speed(1.0)
//!     .agent_radius(3.0)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(population.len(), 50);
//! assert_eq!(population.counts().infected, 1);
//! assert_eq!(population.graph().edge_count(), 50 * 49 / 2);
//! ```

use log::debug;

use sir_core::{AgentId, Bounds, SimConfig, SimRng, SirError, SirResult, Vec2};

use crate::{Agent, Population};

/// Fluent builder for [`Population`].
pub struct PopulationBuilder {
    count:        usize,
    bounds:       Bounds,
    max_speed:    f64,
    agent_radius: f64,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents inside `bounds`.
    ///
    /// Speed and radius start at zero; set them explicitly.
    pub fn new(count: usize, bounds: Bounds) -> Self {
        Self {
            count,
            bounds,
            max_speed:    0.0,
            agent_radius: 0.0,
        }
    }

    /// Velocity components are drawn uniformly from `[-max_speed, max_speed]`.
    pub fn max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Drawing radius given to every agent.
    pub fn agent_radius(mut self, radius: f64) -> Self {
        self.agent_radius = radius;
        self
    }

    /// Place agents, seed one infection, and join every pair.
    ///
    /// Fails with `InvalidArgument` if `count < 1`, the bounds are not
    /// positive, or `max_speed` is negative.
    pub fn build(self, rng: &mut SimRng) -> SirResult<Population> {
        if self.count < 1 {
            return Err(SirError::invalid(format!(
                "population needs at least 1 agent, got {}",
                self.count
            )));
        }
        if !self.bounds.is_valid() {
            return Err(SirError::invalid(format!(
                "world bounds must be positive, got {} x {}",
                self.bounds.width, self.bounds.height
            )));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(SirError::invalid(format!(
                "max_speed must be a non-negative number, got {}",
                self.max_speed
            )));
        }

        let Bounds { width, height } = self.bounds;
        let s = self.max_speed;
        let mut agents: Vec<Agent> = (0..self.count)
            .map(|_| {
                let position = Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
                let velocity = Vec2::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s));
                Agent::new(position, velocity, self.agent_radius)
            })
            .collect();

        let seed = rng.gen_range(0..self.count);
        agents[seed].infect();
        debug!(
            "built population of {} in {}x{}; seeded infection at {}",
            self.count,
            width,
            height,
            AgentId(seed as u32)
        );

        Population::from_agents(agents, self.bounds)
    }
}

/// Build the population described by `config`.
pub fn build_population(config: &SimConfig, rng: &mut SimRng) -> SirResult<Population> {
    PopulationBuilder::new(config.population_size, config.bounds())
        .max_speed(config.max_speed)
        .agent_radius(config.agent_radius)
        .build(rng)
}
