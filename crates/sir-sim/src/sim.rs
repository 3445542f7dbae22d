//! The `Sim` struct and its tick loop.

use log::{info, trace};

use sir_agent::{Population, SirCounts};
use sir_core::{Cadence, SimConfig, SimRng, SirError, Tick};
use sir_intervention::Intervention;

use crate::step::{move_agents, progress, resolve_contacts, transmit};
use crate::{SimObserver, SimResult};

/// What happened during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// The tick that just completed (first tick is `T1`).
    pub tick:           Tick,
    /// Counts after the tick, including continuous interventions.
    pub counts:         SirCounts,
    pub new_infections: usize,
    pub new_recoveries: usize,
    /// Pairs within infection radius this tick.
    pub contacts:       usize,
}

/// The main simulation runner.
///
/// Each call to [`step`](Sim::step) runs the six phases in order:
///
/// 1. **Movement**: every agent integrates its velocity and reflects off the
///    world edges.
/// 2. **Contacts**: every edge is tested against `infection_radius`.
/// 3. **Transmission**: contact pairs with one infected end roll for
///    infection; results are committed after all pairs are read.
/// 4. **Progression**: infected timers advance, recovering at
///    `recovery_ticks`.
/// 5. **Interventions**: continuous transforms run in configuration order.
/// 6. **Invariants**: counts must sum to the population and the recovered
///    count may never shrink.  A violation aborts the run.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated run parameters.
    pub config: SimConfig,

    /// Number of completed ticks.
    pub tick: Tick,

    /// All agents and the contact graph.
    pub population: Population,

    /// The single random stream for the run.  Every draw comes from here so
    /// a seed reproduces the whole trajectory.
    pub rng: SimRng,

    pub(crate) interventions: Vec<Box<dyn Intervention>>,
    pub(crate) last_counts:   SirCounts,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Current S/I/R tallies.
    #[inline]
    pub fn counts(&self) -> SirCounts {
        self.last_counts
    }

    /// Active interventions, once-only ones included, in application order.
    pub fn interventions(&self) -> impl Iterator<Item = &dyn Intervention> + '_ {
        self.interventions.iter().map(|i| i.as_ref())
    }

    /// `true` once `config.total_ticks` ticks have run.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.tick >= self.config.end_tick()
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// A run starting at tick 0 emits an initial snapshot before the first
    /// tick.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.tick == Tick::ZERO && self.config.output_interval_ticks > 0 {
            observer.on_snapshot(Tick::ZERO, &self.population);
        }
        while !self.is_finished() {
            self.step_observed(observer)?;
        }
        observer.on_sim_end(self.tick, self.last_counts);
        info!("finished at {}: {}", self.tick, self.last_counts);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_observed(observer)?;
        }
        Ok(())
    }

    /// Advance one tick without observer callbacks.
    pub fn step(&mut self) -> SimResult<StepReport> {
        let now = self.tick.next();

        // ── Phase 1: movement ─────────────────────────────────────────────
        let bounces = move_agents(&mut self.population);

        // ── Phase 2: contacts ─────────────────────────────────────────────
        let contacts = resolve_contacts(&mut self.population, self.config.infection_radius);

        // ── Phase 3: transmission ─────────────────────────────────────────
        let infected = transmit(
            &mut self.population,
            &contacts,
            self.config.infection_probability,
            &mut self.rng,
        );

        // ── Phase 4: progression ──────────────────────────────────────────
        let recovered = progress(&mut self.population, self.config.recovery_ticks);

        // ── Phase 5: continuous interventions ─────────────────────────────
        for intervention in &self.interventions {
            if intervention.cadence() == Cadence::Continuous {
                let affected = intervention.apply(&mut self.population, &mut self.rng)?;
                trace!("{now}: {} affected {affected} agents", intervention.name());
            }
        }

        // ── Phase 6: invariants ───────────────────────────────────────────
        let counts = self.population.check_invariants()?;
        if counts.recovered < self.last_counts.recovered {
            return Err(SirError::InvariantViolation(format!(
                "recovered count fell from {} to {} at {now}",
                self.last_counts.recovered, counts.recovered
            ))
            .into());
        }

        trace!(
            "{now}: {counts} (+{} infected, +{} recovered, {} contacts, {bounces} bounces)",
            infected.len(),
            recovered,
            contacts.len()
        );

        self.tick = now;
        self.last_counts = counts;
        Ok(StepReport {
            tick: now,
            counts,
            new_infections: infected.len(),
            new_recoveries: recovered,
            contacts: contacts.len(),
        })
    }

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepReport> {
        let now = self.tick.next();
        observer.on_tick_start(now);
        let report = self.step()?;
        observer.on_tick_end(&report);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.population);
        }
        Ok(report)
    }
}
