//! The simulated individual and its epidemiological state machine.
//!
//! ```text
//! Susceptible ──infect()──▶ Infected ──progress() × recovery_ticks──▶ Recovered
//! ```
//!
//! `Recovered` is absorbing.  The state is private so the only way to change
//! it is through [`Agent::infect`] and [`Agent::progress`], which enforce
//! the arrows above.

use std::fmt;

use rustc_hash::FxHashSet;

use sir_core::{AgentId, Bounds, Vec2};

/// Epidemiological state.  Exactly one holds at any time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HealthState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Infected    => "infected",
            HealthState::Recovered   => "recovered",
        };
        f.write_str(s)
    }
}

/// One agent: kinematics, epidemiological state, and the per-agent knobs
/// interventions adjust.
#[derive(Clone, Debug)]
pub struct Agent {
    pub position: Vec2,
    pub velocity: Vec2,

    /// Drawing radius.  Transmission uses the configured infection radius.
    pub radius: f64,

    state: HealthState,

    /// Ticks since infection.  Zero while susceptible or recovered.
    infection_timer: u32,

    /// Multiplier on the chance of being infected.  1.0 = unprotected.
    pub susceptibility: f64,

    /// Multiplier applied to every transmission this agent takes part in,
    /// as source or target.  1.0 = no mask.
    pub mask_factor: f64,

    /// Set by vaccination.  A first-dose pass skips agents that have it.
    pub vaccinated: bool,

    /// Agents this one has been within infection radius of.  Filled by the
    /// contact phase, read and cleared by infection tracing.
    pub contacts: FxHashSet<AgentId>,
}

impl Agent {
    /// A susceptible agent with no protection.
    pub fn new(position: Vec2, velocity: Vec2, radius: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
            state: HealthState::Susceptible,
            infection_timer: 0,
            susceptibility: 1.0,
            mask_factor: 1.0,
            vaccinated: false,
            contacts: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> HealthState {
        self.state
    }

    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.state == HealthState::Susceptible
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.state == HealthState::Infected
    }

    #[inline]
    pub fn is_recovered(&self) -> bool {
        self.state == HealthState::Recovered
    }

    #[inline]
    pub fn infection_timer(&self) -> u32 {
        self.infection_timer
    }

    /// Susceptible → Infected with the timer reset to zero.
    ///
    /// Returns `false` (and changes nothing) for infected or recovered
    /// agents.
    pub fn infect(&mut self) -> bool {
        if self.state != HealthState::Susceptible {
            return false;
        }
        self.state = HealthState::Infected;
        self.infection_timer = 0;
        true
    }

    /// Advance an infected agent's timer by one tick.  When the timer
    /// reaches `recovery_ticks` the agent becomes Recovered and the timer
    /// resets.  Returns `true` on that transition.
    pub fn progress(&mut self, recovery_ticks: u32) -> bool {
        if self.state != HealthState::Infected {
            return false;
        }
        self.infection_timer += 1;
        if self.infection_timer >= recovery_ticks {
            self.state = HealthState::Recovered;
            self.infection_timer = 0;
            return true;
        }
        false
    }

    /// Integrate position by velocity and reflect off the world edges.
    ///
    /// Returns which axes (`[x, y]`) bounced this call.  Each axis flips its
    /// velocity at most once per call and the position is mirrored back
    /// inside `bounds`.
    pub fn advance(&mut self, bounds: Bounds) -> [bool; 2] {
        self.position += self.velocity;
        let bx = reflect(&mut self.position.x, &mut self.velocity.x, bounds.width);
        let by = reflect(&mut self.position.y, &mut self.velocity.y, bounds.height);
        [bx, by]
    }
}

/// Mirror `pos` back into `[0, extent]` and invert `vel` if it escaped.
#[inline]
fn reflect(pos: &mut f64, vel: &mut f64, extent: f64) -> bool {
    if *pos < 0.0 {
        *pos = (-*pos).min(extent);
    } else if *pos > extent {
        *pos = (2.0 * extent - *pos).max(0.0);
    } else {
        return false;
    }
    *vel = -*vel;
    true
}
