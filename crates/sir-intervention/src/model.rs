//! The `Intervention` trait — the extension point for policy levers.

use sir_agent::Population;
use sir_core::{Cadence, SimRng, SirResult};

/// A transform over the population emulating a public-health policy.
///
/// The simulation applies [`Cadence::Once`] interventions when it is built
/// and [`Cadence::Continuous`] ones at the end of every tick, in
/// configuration order.  Implementations draw randomness only from the
/// supplied `rng` so seeded runs stay reproducible.
///
/// # Example
///
/// ```rust
/// use sir_agent::Population;
/// use sir_core::{Cadence, SimRng, SirResult};
/// use sir_intervention::Intervention;
///
/// /// Freezes everyone in place.
/// struct StayHome;
///
/// impl Intervention for StayHome {
///     fn name(&self) -> &'static str { "stay_home" }
///     fn cadence(&self) -> Cadence { Cadence::Once }
///     fn apply(&self, population: &mut Population, _rng: &mut SimRng) -> SirResult<usize> {
///         population.ensure_not_empty(self.name())?;
///         let mut n = 0;
///         for (_, agent) in population.agents_mut() {
///             agent.velocity = sir_core::Vec2::ZERO;
///             n += 1;
///         }
///         Ok(n)
///     }
/// }
/// ```
pub trait Intervention: Send + Sync + 'static {
    /// Stable snake_case name, used in logs and summaries.
    fn name(&self) -> &'static str;

    /// When the simulation should apply this intervention.
    fn cadence(&self) -> Cadence;

    /// Mutate `population` in place.  Returns the number of agents (or
    /// agent pairs) affected.
    fn apply(&self, population: &mut Population, rng: &mut SimRng) -> SirResult<usize>;
}
