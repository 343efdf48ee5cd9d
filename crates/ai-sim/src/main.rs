//! ai-sim - headless behavior simulation.
//!
//! - `ai-sim run <scenario.yaml>` - step the scenario and report door activity
//! - `ai-sim check <scenario.yaml>` - validate a scenario without running it

use std::path::{Path, PathBuf};

use ai_sim::{Scenario, Simulation};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ai-sim")]
#[command(about = "Headless block-world behavior simulation", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario
    Run {
        scenario: PathBuf,

        /// Ticks to simulate (defaults to the scenario's own value)
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Validate a scenario
    Check { scenario: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json_log);

    match cli.command {
        Commands::Run { scenario, ticks } => run_scenario(&scenario, ticks),
        Commands::Check { scenario } => check_scenario(&scenario),
    }
}

fn init_logging(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let builder = fmt().with_env_filter(filter).with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_scenario(path: &Path, ticks: Option<u64>) -> Result<()> {
    let scenario = Scenario::load(path)?;
    let ticks = ticks.unwrap_or(scenario.ticks);
    let mut sim = Simulation::new(&scenario)
        .with_context(|| format!("Invalid scenario {}", path.display()))?;

    tracing::info!(scenario = %path.display(), ticks, "running");
    let report = sim.run(ticks);

    println!("Simulated {} ticks", report.ticks);
    println!("Door transitions: {}", report.transitions.len());
    for (pos, door) in &report.doors {
        println!(
            "  {pos}  {:?}  {}  opened {}x, closed {}x",
            door.material,
            if door.open { "open" } else { "closed" },
            report.opens_of(*pos),
            report.closes_of(*pos),
        );
    }
    Ok(())
}

fn check_scenario(path: &Path) -> Result<()> {
    let scenario = Scenario::load(path)?;
    scenario
        .validate()
        .with_context(|| format!("Invalid scenario {}", path.display()))?;
    println!(
        "{}: ok ({} agents, {} doors)",
        path.display(),
        scenario.agents.len(),
        scenario.doors.len()
    );
    Ok(())
}
