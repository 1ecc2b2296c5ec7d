//! Command-line interface for oxo.

use clap::{Parser, Subcommand};
use oxo_engine::{Difficulty, Mode, Player};
use std::path::PathBuf;

/// oxo - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Terminal tic-tac-toe with three computer difficulty levels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// human-vs-human or human-vs-ai
        #[arg(long)]
        mode: Option<Mode>,

        /// easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Side played by the computer (X or O)
        #[arg(long)]
        ai_player: Option<Player>,

        /// Pause before showing the computer's move, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play computer against computer and print the results
    Simulate {
        /// Difficulty of the X side
        #[arg(long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty of the O side
        #[arg(long, default_value = "easy")]
        o: Difficulty,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::parse_from([
            "oxo",
            "play",
            "--mode",
            "human-vs-human",
            "-d",
            "medium",
            "--ai-player",
            "x",
        ]);
        match cli.command {
            Command::Play {
                mode,
                difficulty,
                ai_player,
                ..
            } => {
                assert_eq!(mode, Some(Mode::HumanVsHuman));
                assert_eq!(difficulty, Some(Difficulty::Medium));
                assert_eq!(ai_player, Some(Player::X));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::parse_from(["oxo", "simulate"]);
        match cli.command {
            Command::Simulate { x, o, games, seed } => {
                assert_eq!(x, Difficulty::Hard);
                assert_eq!(o, Difficulty::Easy);
                assert_eq!(games, 100);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["oxo", "simulate", "--config", "oxo.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("oxo.toml")));
    }
}
