//! Turn configured [`InterventionSpec`]s into runnable transforms.

use sir_core::{InterventionSpec, SirResult};

use crate::{
    InfectionTracing, Intervention, Lockdown, Masking, RemoteWork, SocialDistancing,
    StaggeredHours, Vaccination,
};

/// Validate `spec` and build the matching [`Intervention`].
pub fn from_spec(spec: &InterventionSpec) -> SirResult<Box<dyn Intervention>> {
    let built: Box<dyn Intervention> = match *spec {
        InterventionSpec::Vaccination { effectiveness, cadence } => {
            Box::new(Vaccination::new(effectiveness, cadence)?)
        }
        InterventionSpec::Lockdown { factor } => Box::new(Lockdown::new(factor)?),
        InterventionSpec::Masking { effectiveness } => Box::new(Masking::new(effectiveness)?),
        InterventionSpec::SocialDistancing { threshold } => {
            Box::new(SocialDistancing::new(threshold)?)
        }
        InterventionSpec::InfectionTracing { probability, isolation_size } => {
            Box::new(InfectionTracing::new(probability, isolation_size)?)
        }
        InterventionSpec::StaggeredHours { fraction } => Box::new(StaggeredHours::new(fraction)?),
        InterventionSpec::RemoteWork { factor } => Box::new(RemoteWork::new(factor)?),
    };
    Ok(built)
}
