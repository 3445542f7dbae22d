//! JSON configuration loading and command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use sir_core::SimConfig;

/// Used when no `--config` file is given.
pub const BASELINE_CONFIG: &str = include_str!("../configs/baseline.json");

/// Values given on the command line take precedence over the file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub population:       Option<usize>,
    pub infection_radius: Option<f64>,
    pub ticks:            Option<u64>,
    pub seed:             Option<u64>,
}

impl Overrides {
    pub fn apply(&self, config: &mut SimConfig) {
        if let Some(n) = self.population {
            config.population_size = n;
        }
        if let Some(r) = self.infection_radius {
            config.infection_radius = r;
        }
        if let Some(t) = self.ticks {
            config.total_ticks = t;
        }
        if let Some(s) = self.seed {
            config.seed = s;
        }
    }
}

/// Parse a `SimConfig` from JSON text.  Every field is required.
pub fn parse_config(json: &str) -> Result<SimConfig> {
    serde_json::from_str(json).context("invalid simulation config")
}

/// Read `path` (or the built-in baseline), apply `overrides`, and validate.
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<SimConfig> {
    let mut config = match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("cannot read config {}", p.display()))?;
            parse_config(&text).with_context(|| format!("in {}", p.display()))?
        }
        None => parse_config(BASELINE_CONFIG)?,
    };
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
