//! `sir-intervention` — policy levers that mutate agents or their positions.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`model`]       | `Intervention` trait                                    |
//! | [`vaccination`] | `Vaccination`, `vaccinate`, `boost`                     |
//! | [`lockdown`]    | `Lockdown`, `lockdown`                                  |
//! | [`masking`]     | `Masking`, `mask_wearing`                               |
//! | [`distancing`]  | `SocialDistancing`, `social_distance`                   |
//! | [`tracing`]     | `InfectionTracing`, `trace_infections`                  |
//! | [`workforce`]   | `StaggeredHours`, `RemoteWork` and their functions      |
//! | [`factory`]     | `from_spec` — `InterventionSpec` → `Box<dyn Intervention>` |
//!
//! # Semantics
//!
//! Preventive levers (vaccines, masks) lower transmission probability; none
//! of the transforms cure an infected agent or touch the S/I/R state.  Every
//! transform rejects an empty population with `InvalidArgument` and returns
//! how many agents (or pairs, for distancing) it changed.

pub mod distancing;
pub mod factory;
pub mod lockdown;
pub mod masking;
pub mod model;
pub mod tracing;
pub mod vaccination;
pub mod workforce;

#[cfg(test)]
mod tests;

pub use distancing::{social_distance, SocialDistancing};
pub use factory::from_spec;
pub use lockdown::{lockdown, Lockdown};
pub use masking::{mask_wearing, Masking};
pub use model::Intervention;
pub use tracing::{trace_infections, InfectionTracing};
pub use vaccination::{boost, vaccinate, Vaccination};
pub use workforce::{remote_work, staggered_work_hours, RemoteWork, StaggeredHours};
