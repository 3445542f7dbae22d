//! `sir-agent` — agents and the population graph.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`agent`]      | `Agent`, `HealthState`                                  |
//! | [`counts`]     | `SirCounts`                                             |
//! | [`population`] | `Population` (complete graph of agents), `ContactEdge`  |
//! | [`builder`]    | `PopulationBuilder`, `build_population`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `HealthState` and `SirCounts`. |

pub mod agent;
pub mod builder;
pub mod counts;
pub mod population;


pub use agent::{Agent, HealthState};
pub use builder::{build_population, PopulationBuilder};
pub use counts::SirCounts;
pub use population::{ContactEdge, Population};
