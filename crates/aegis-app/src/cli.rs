//! Command-line arguments and the files they point at.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use aegis_core::config::EngagementConfig;
use aegis_core::constants::DEFAULT_MAX_TICKS;
use aegis_sim::procgen;
use aegis_sim::scenario::{self, ContactSeed};

#[derive(Parser, Debug)]
#[command(
    name = "aegis",
    version,
    about = "Point-defense engagement simulator"
)]
pub struct Cli {
    /// JSON file with engagement parameters; missing fields use defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file with the initial contact list.
    #[arg(long, conflicts_with = "raid")]
    pub scenario: Option<PathBuf>,

    /// Generate a random raid with this many contacts instead of the standard scenario.
    #[arg(long)]
    pub raid: Option<usize>,

    /// RNG seed for --raid.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Override the pause between ticks (milliseconds).
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Stop after this many ticks even if entities remain.
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    pub max_ticks: u64,

    /// Print events as JSON lines instead of narration.
    #[arg(long)]
    pub json: bool,

    /// Skip the start menu.
    #[arg(short, long)]
    pub yes: bool,
}

impl Cli {
    pub fn load_config(&self) -> Result<EngagementConfig> {
        let config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                EngagementConfig::from_json_str(&raw)
                    .with_context(|| format!("loading config {}", path.display()))?
            }
            None => EngagementConfig::default(),
        };
        Ok(config)
    }

    pub fn load_scenario(&self, config: &EngagementConfig) -> Result<Vec<ContactSeed>> {
        if let Some(path) = &self.scenario {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading scenario {}", path.display()))?;
            return scenario::from_json_str(&raw)
                .with_context(|| format!("loading scenario {}", path.display()));
        }

        Ok(match self.raid {
            Some(count) => {
                let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
                procgen::random_raid(&mut rng, count, config)
            }
            None => scenario::standard(),
        })
    }

    pub fn tick_delay(&self, config: &EngagementConfig) -> Duration {
        self.delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.tick_delay())
    }
}
