//! Top-level simulation configuration.

use crate::intervention::{positive, unit_interval};
use crate::{Bounds, InterventionSpec, SirError, SirResult, Tick};

/// Every tunable of a run.  Nothing in the engine falls back to a hidden
/// default: the builder and step engine read all parameters from here.
///
/// Typically loaded from a JSON file by the application crate (enable the
/// `serde` feature) and passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of agents.  Must be at least 1.
    pub population_size: usize,

    /// World extent along x.
    pub width: f64,

    /// World extent along y.
    pub height: f64,

    /// Initial velocity components are drawn from `[-max_speed, max_speed]`.
    pub max_speed: f64,

    /// Drawing radius of an agent.  Has no effect on transmission.
    pub agent_radius: f64,

    /// Two agents closer than this are in contact.
    pub infection_radius: f64,

    /// Per-contact transmission probability in `[0, 1]`.
    pub infection_probability: f64,

    /// Ticks an agent stays infected before recovering.  Must be at least 1.
    pub recovery_ticks: u32,

    /// Total ticks for `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Report a population snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Active interventions, applied in this order.
    pub interventions: Vec<InterventionSpec>,
}

impl SimConfig {
    /// The world rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Check every parameter.  Called by `SimBuilder::build`; configuration
    /// errors never surface mid-run.
    pub fn validate(&self) -> SirResult<()> {
        if self.population_size < 1 {
            return Err(SirError::invalid(format!(
                "population_size must be at least 1, got {}",
                self.population_size
            )));
        }
        if !self.bounds().is_valid() {
            return Err(SirError::invalid(format!(
                "world bounds must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(SirError::invalid(format!(
                "max_speed must be a non-negative number, got {}",
                self.max_speed
            )));
        }
        positive("agent_radius", self.agent_radius)?;
        if !(self.infection_radius.is_finite() && self.infection_radius >= 0.0) {
            return Err(SirError::invalid(format!(
                "infection_radius must be a non-negative number, got {}",
                self.infection_radius
            )));
        }
        unit_interval("infection_probability", self.infection_probability)?;
        if self.recovery_ticks < 1 {
            return Err(SirError::invalid("recovery_ticks must be at least 1"));
        }

        for (i, spec) in self.interventions.iter().enumerate() {
            spec.validate()?;
            if self.interventions[..i].iter().any(|other| other.kind() == spec.kind()) {
                return Err(SirError::invalid(format!(
                    "intervention {} configured more than once",
                    spec.kind()
                )));
            }
        }
        Ok(())
    }
}
