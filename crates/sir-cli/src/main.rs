//! rust_sir — headless runner for the SIR agent simulation.
//!
//! Loads a JSON [`SimConfig`](sir_core::SimConfig) (or the built-in
//! baseline), runs it to completion, and writes `tick_summaries.csv`,
//! `agent_snapshots.csv`, and `summary.json` to the output directory.
//!
//! ```text
//! rust_sir --config crates/sir-cli/configs/combined.json --seed 3 --output out/
//! ```

mod config;
mod logging;
mod summary;


use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, anyhow};
use clap::Parser;
use log::{LevelFilter, info, warn};

use sir_output::{CsvWriter, SimOutputObserver};
use sir_sim::{SimBuilder, SirHistory};

use config::{Overrides, load_config};
use summary::RunSummary;

#[derive(Parser, Debug)]
#[command(name = "rust_sir", version, about = "Agent-based SIR epidemic simulation")]
struct Cli {
    /// JSON simulation config (default: built-in baseline)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for CSV and summary output
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Override the number of agents
    #[arg(short, long)]
    population: Option<usize>,

    /// Override the infection radius
    #[arg(short, long)]
    radius: Option<f64>,

    /// Override the number of ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip CSV output and only print the summary
    #[arg(long)]
    no_output: bool,

    /// off, error, warn, info, debug, or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            population:       self.population,
            infection_radius: self.radius,
            ticks:            self.ticks,
            seed:             self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log = logging::init(cli.log_level)?;

    // 1. Config.
    let config = load_config(cli.config.as_deref(), &cli.overrides())?;
    info!(
        "{} agents in {}x{}, {} ticks, seed {}",
        config.population_size, config.width, config.height, config.total_ticks, config.seed
    );

    // 2. Build sim.
    let seed = config.seed;
    let mut sim = SimBuilder::new(config).build()?;
    let interventions: Vec<&'static str> = sim.interventions().map(|i| i.name()).collect();
    if !interventions.is_empty() {
        info!("interventions: {}", interventions.join(", "));
    }
    let mut history = SirHistory::new(sim.counts());

    // 3. Run.
    let t0 = Instant::now();
    if cli.no_output {
        sim.run(&mut history)?;
    } else {
        let writer = CsvWriter::new(&cli.output)?;
        let mut observers = (SimOutputObserver::new(writer), &mut history);
        sim.run(&mut observers)?;
        if let Some(e) = observers.0.take_error() {
            return Err(anyhow!("output error: {e}"));
        }
    }
    let elapsed = t0.elapsed();

    // 4. Summary.
    let summary = RunSummary::from_history(seed, interventions, &history, elapsed.as_secs_f64());
    if !cli.no_output {
        let path = cli.output.join("summary.json");
        if let Err(e) = summary.write_json(&path) {
            warn!("could not write {}: {e}", path.display());
        }
    }

    println!("Simulation complete in {:.3} s", summary.elapsed_secs);
    println!("  final        : {}", summary.final_counts);
    println!("  peak infected: {} at tick {}", summary.peak_infected, summary.peak_tick);
    if let Some(rate) = summary.mean_infection_rate {
        println!("  mean Δ infected per tick: {rate:+.4}");
    }
    if let Some(rate) = summary.attack_rate {
        println!("  attack rate  : {:.1}%", rate * 100.0);
    }
    if !cli.no_output {
        println!("  output       : {}", cli.output.display());
    }
    Ok(())
}
