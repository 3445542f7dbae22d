//! Configured interventions — the data half.
//!
//! `InterventionSpec` is what a configuration file names.  The `sir-intervention`
//! crate turns each spec into a runnable transform.  Parameter ranges are
//! checked here by [`InterventionSpec::validate`] so bad values are rejected
//! before the simulation starts.

use std::fmt;

use crate::{SirError, SirResult};

/// When an intervention is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cadence {
    /// Applied exactly once, when the simulation is built.
    Once,
    /// Applied at the end of every tick.
    Continuous,
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Cadence::Once       => "once",
            Cadence::Continuous => "continuous",
        };
        f.write_str(s)
    }
}

/// One configured public-health intervention and its severity.
///
/// With the `serde` feature this is internally tagged by `kind`:
///
/// ```json
/// { "kind": "lockdown", "factor": 0.5 }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum InterventionSpec {
    /// `Once`: scale every unvaccinated agent's susceptibility by
    /// `1 - effectiveness`.  `Continuous`: scale every agent's susceptibility
    /// by `1 - effectiveness` each tick (booster doses compound).
    Vaccination { effectiveness: f64, cadence: Cadence },

    /// Scale every agent's velocity by `1 - factor`.
    Lockdown { factor: f64 },

    /// Set every agent's mask factor to `1 - effectiveness`.
    Masking { effectiveness: f64 },

    /// Push apart agents closer than `threshold`.
    SocialDistancing { threshold: f64 },

    /// Isolate infected agents with probability `probability` into the
    /// `isolation_size × isolation_size` corner region.
    InfectionTracing { probability: f64, isolation_size: f64 },

    /// Halve the velocity of a random `fraction` of agents.
    StaggeredHours { fraction: f64 },

    /// Scale the velocity of a random subset of agents by `1 - factor`.
    RemoteWork { factor: f64 },
}

impl InterventionSpec {
    /// Stable snake_case name, identical to the serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            InterventionSpec::Vaccination { .. }      => "vaccination",
            InterventionSpec::Lockdown { .. }         => "lockdown",
            InterventionSpec::Masking { .. }          => "masking",
            InterventionSpec::SocialDistancing { .. } => "social_distancing",
            InterventionSpec::InfectionTracing { .. } => "infection_tracing",
            InterventionSpec::StaggeredHours { .. }   => "staggered_hours",
            InterventionSpec::RemoteWork { .. }       => "remote_work",
        }
    }

    /// When this intervention runs.
    pub fn cadence(&self) -> Cadence {
        match self {
            InterventionSpec::Vaccination { cadence, .. } => *cadence,
            InterventionSpec::Lockdown { .. }
            | InterventionSpec::StaggeredHours { .. }
            | InterventionSpec::RemoteWork { .. } => Cadence::Once,
            InterventionSpec::Masking { .. }
            | InterventionSpec::SocialDistancing { .. }
            | InterventionSpec::InfectionTracing { .. } => Cadence::Continuous,
        }
    }

    /// Check that every parameter is inside its documented range.
    pub fn validate(&self) -> SirResult<()> {
        match *self {
            InterventionSpec::Vaccination { effectiveness, .. } => {
                unit_interval("vaccination.effectiveness", effectiveness)
            }
            InterventionSpec::Lockdown { factor } => unit_interval("lockdown.factor", factor),
            InterventionSpec::Masking { effectiveness } => {
                unit_interval("masking.effectiveness", effectiveness)
            }
            InterventionSpec::SocialDistancing { threshold } => {
                positive("social_distancing.threshold", threshold)
            }
            InterventionSpec::InfectionTracing { probability, isolation_size } => {
                unit_interval("infection_tracing.probability", probability)?;
                positive("infection_tracing.isolation_size", isolation_size)
            }
            InterventionSpec::StaggeredHours { fraction } => {
                unit_interval("staggered_hours.fraction", fraction)
            }
            InterventionSpec::RemoteWork { factor } => unit_interval("remote_work.factor", factor),
        }
    }
}

/// `value` must lie in the closed interval `[0, 1]`.
pub(crate) fn unit_interval(name: &str, value: f64) -> SirResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SirError::invalid(format!("{name} must be in [0, 1], got {value}")))
    }
}

/// `value` must be finite and strictly positive.
pub(crate) fn positive(name: &str, value: f64) -> SirResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SirError::invalid(format!("{name} must be a positive number, got {value}")))
    }
}
