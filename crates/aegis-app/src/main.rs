use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use aegis_app::cli::Cli;
use aegis_app::game_loop::{self, LoopOptions};
use aegis_app::menu::{self, MenuChoice};
use aegis_app::narration::{JsonLines, Narrator};
use aegis_sim::EngagementController;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.load_config()?;

    if !cli.yes && !cli.json {
        let choice = menu::prompt(io::stdin().lock(), io::stdout().lock())?;
        if choice == MenuChoice::Exit {
            println!("Shutting down...");
            return Ok(());
        }
    }

    let seeds = cli.load_scenario(&config)?;
    info!(contacts = seeds.len(), "seeding engagement controller");

    let mut engine = EngagementController::new(config);
    engine.seed(seeds);

    let options = LoopOptions {
        tick_delay: cli.tick_delay(&config),
        max_ticks: cli.max_ticks,
    };
    let stdout = io::stdout();
    let outcome = if cli.json {
        game_loop::run(&mut engine, &options, &mut JsonLines::new(stdout.lock()))?
    } else {
        game_loop::run(&mut engine, &options, &mut Narrator::new(stdout.lock()))?
    };

    info!(
        ticks = outcome.ticks,
        completed = outcome.completed,
        destroyed = outcome.stats.contacts_destroyed,
        escaped = outcome.stats.contacts_escaped,
        "simulation finished"
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
