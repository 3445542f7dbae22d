//! Fluent builder for constructing a [`Sim`].

use log::debug;

use sir_agent::{build_population, Population};
use sir_core::{Cadence, SimConfig, SimRng, Tick};
use sir_intervention::{from_spec, Intervention};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — world, disease parameters, seed, interventions, …
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                       |
/// |----------------------|-----------------------------------------------|
/// | `.rng(r)`            | `SimRng::new(config.seed)`                    |
/// | `.population(p)`     | Random placement via `build_population`       |
/// | `.intervention(i)`   | Only the interventions listed in the config   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .intervention(Box::new(MyCurfew))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:        SimConfig,
    rng:           Option<SimRng>,
    population:    Option<Population>,
    interventions: Vec<Box<dyn Intervention>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            rng:           None,
            population:    None,
            interventions: Vec::new(),
        }
    }

    /// Supply the run's random stream instead of seeding from the config.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Supply a hand-placed population.
    ///
    /// Must have `config.population_size` agents and the config's bounds.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Add a custom intervention after the configured ones.
    pub fn intervention(mut self, intervention: Box<dyn Intervention>) -> Self {
        self.interventions.push(intervention);
        self
    }

    /// Validate the config, build the population, apply once-only
    /// interventions, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));

        // ── Resolve the population ────────────────────────────────────────
        let mut population = match self.population {
            Some(p) => {
                if p.len() != self.config.population_size {
                    return Err(SimError::AgentCountMismatch {
                        expected: self.config.population_size,
                        got:      p.len(),
                        what:     "supplied population",
                    });
                }
                if p.bounds() != self.config.bounds() {
                    return Err(SimError::Config(format!(
                        "population bounds {}x{} differ from configured {}x{}",
                        p.bounds().width,
                        p.bounds().height,
                        self.config.width,
                        self.config.height
                    )));
                }
                p
            }
            None => build_population(&self.config, &mut rng)?,
        };

        // ── Instantiate interventions in order ────────────────────────────
        let mut interventions = self
            .config
            .interventions
            .iter()
            .map(from_spec)
            .collect::<Result<Vec<_>, _>>()?;
        interventions.extend(self.interventions);

        for intervention in interventions.iter().filter(|i| i.cadence() == Cadence::Once) {
            let affected = intervention.apply(&mut population, &mut rng)?;
            debug!("applied {} once: {affected} agents affected", intervention.name());
        }

        let counts = population.check_invariants()?;
        debug!(
            "sim ready: {} agents, {} interventions, {counts}",
            population.len(),
            interventions.len()
        );

        Ok(Sim {
            config: self.config,
            tick: Tick::ZERO,
            population,
            rng,
            interventions,
            last_counts: counts,
        })
    }
}
