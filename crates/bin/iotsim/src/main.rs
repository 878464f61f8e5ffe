//! # `iotsim` — IoT device simulation
//!
//! Composition root that wires the fleet, the value source and the driver,
//! then runs the simulation to completion.
//!
//! ## Responsibilities
//! - Load configuration (optional `iotsim.toml`, env var overrides)
//! - Initialise logging on stderr, keeping stdout for the report
//! - Build the fleet and pick a random or seeded value source
//! - Run every cycle, writing the report to stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use iotsim_adapter_virtual::{RandomSource, SeededSource};
use iotsim_app::simulation::Simulation;
use iotsim_domain::reading::ValueSource;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let fleet = config.fleet()?;
    let source: Box<dyn ValueSource> = match config.simulation.seed {
        Some(seed) => Box::new(SeededSource::from_seed(seed)),
        None => Box::new(RandomSource::default()),
    };

    let mut simulation = Simulation::new(fleet, source, config.settings());
    let mut out = std::io::stdout().lock();
    simulation.run(&mut out).await?;

    Ok(())
}
