use anyhow::{Context, Result};
use clap::Parser;
use mvh_core::{IdCounter, Occupancy, Outcome, World, load_world_file};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

mod config_file;
mod narration;

use config_file::load_sim_config;
use narration::{narrate, outcome_text};

#[derive(Parser)]
#[command(author, version, about = "Run a Monsters vs Heroes simulation", long_about = None)]
struct Args {
    /// Path to the world file to simulate
    world: PathBuf,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// TOML file overriding the movement policy
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value_t = 1000)]
    max_turns: u64,
    /// Only print the final state
    #[arg(short, long)]
    quiet: bool,
    /// Print a JSON summary line at the end
    #[arg(long)]
    summary_json: bool,
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    turns: u64,
    outcome: Option<Outcome>,
    snapshot_hash: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_sim_config(args.config.as_deref())?;
    let mut ids = IdCounter::new();
    let mut world = load_world_file(&args.world, &mut ids, args.seed, config)
        .with_context(|| format!("Failed to load world file: {}", args.world.display()))?;
    info!(seed = args.seed, rows = world.rows(), columns = world.columns(), "world loaded");

    println!("{}", world.game_string());
    let mut seen_events = 0usize;
    while world.is_active() && world.turn() < args.max_turns {
        world.advance_turn();
        if !args.quiet {
            println!("Turn {}", world.turn());
            for event in &world.log()[seen_events..] {
                println!("{}", narrate(&world, event));
            }
            println!("{}", world.game_string());
        }
        seen_events = world.log().len();
    }

    if args.quiet {
        println!("{}", world.game_string());
    }
    match world.outcome() {
        Some(outcome) => println!("Outcome: {}", outcome_text(outcome)),
        None => {
            world.end_simulation();
            println!("Stopped after {} turns without a winner", world.turn());
        }
    }

    if args.summary_json {
        let summary = RunSummary {
            seed: world.seed(),
            turns: world.turn(),
            outcome: world.outcome(),
            snapshot_hash: world.snapshot_hash(),
        };
        println!("{}", serde_json::to_string(&summary).context("Failed to serialize summary")?);
    }

    Ok(())
}
