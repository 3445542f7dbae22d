//! `sir-sim` — the step engine for the rust_sir epidemic simulator.
//!
//! # Tick sequence
//!
//! ```text
//! for tick in 1..=config.total_ticks:
//!   ① Movement     — integrate positions, reflect off the world edges.
//!   ② Contacts     — every edge whose endpoints are closer than the
//!                    infection radius (distance pass parallel with the
//!                    `parallel` feature).
//!   ③ Transmission — one draw per infected/susceptible contact pair,
//!                    read from the tick-start states, committed at the end.
//!   ④ Progression  — infected timers advance; recovery at `recovery_ticks`.
//!   ⑤ Interventions — continuous transforms in configuration order.
//!   ⑥ Invariants   — counts sum to the population, recovered never shrinks.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the contact distance pass on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sir_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{}", sim.counts());
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod sim;
pub mod step;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use history::SirHistory;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, StepReport};
