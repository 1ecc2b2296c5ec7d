//! oxo - terminal tic-tac-toe
//!
//! Play against a random, heuristic or minimax opponent, or let the
//! computer play itself to compare difficulty levels.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod simulate;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            ai_player,
            ai_delay_ms,
            seed,
        } => {
            let config = config.with_overrides(mode, difficulty, ai_player, ai_delay_ms, seed);
            terminal::run(&config)
        }
        Command::Simulate { x, o, games, seed } => {
            let tally = simulate::simulate(x, o, games, seed.or(*config.seed()))?;
            println!("{x} (X) vs {o} (O) over {} games", tally.games());
            println!("{tally}");
            Ok(())
        }
    }
}
