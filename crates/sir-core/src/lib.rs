//! `sir-core` — foundational types for the `rust_sir` epidemic simulator.
//!
//! This crate is a dependency of every other `sir-*` crate.  It intentionally
//! has no `sir-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`ids`]          | `AgentId`                                            |
//! | [`geo`]          | `Vec2`, `Bounds`                                     |
//! | [`time`]         | `Tick`                                               |
//! | [`rng`]          | `SimRng` (injectable simulation RNG)                 |
//! | [`config`]       | `SimConfig`                                          |
//! | [`intervention`] | `InterventionSpec`, `Cadence`                        |
//! | [`error`]        | `SirError`, `SirResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SimConfig` from JSON.                    |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod intervention;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{SirError, SirResult};
pub use geo::{Bounds, Vec2};
pub use ids::AgentId;
pub use intervention::{Cadence, InterventionSpec};
pub use rng::SimRng;
pub use time::Tick;
