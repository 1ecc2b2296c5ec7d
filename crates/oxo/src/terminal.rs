//! Line-oriented terminal front-end.
//!
//! The terminal never inspects game rules: it forwards input to the
//! [`SessionController`] and draws whatever the observer callbacks report.

use crate::config::AppConfig;
use anyhow::Result;
use oxo_engine::{
    Board, Difficulty, ErrorKind, GameOutcome, Mode, MoveOracle, Player, Position,
    SessionController, SessionObserver,
};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Place(Position),
    /// Start over.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl Input {
    /// Parses one line; `None` if it means nothing.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "reset" | "r" | "new" => Some(Input::Reset),
            "help" | "h" | "?" => Some(Input::Help),
            "quit" | "q" | "exit" => Some(Input::Quit),
            other => Position::parse_input(other).map(Input::Place),
        }
    }
}

/// Command summary, including the accepted `--mode` and `--difficulty` values.
fn help_text() -> String {
    let modes: Vec<String> = Mode::iter().map(|m| m.to_string()).collect();
    let difficulties: Vec<String> = Difficulty::iter().map(|d| d.to_string()).collect();
    format!(
        "Enter a cell number (1-9) or a name like `center` or `top-left`.\n\
         Other commands: reset, help, quit.\n\
         Modes: {}. Difficulties: {}.",
        modes.join(", "),
        difficulties.join(", ")
    )
}

/// Labels of the empty cells, e.g. `Top-left, Center`.
fn free_cells(board: &Board) -> String {
    Position::valid_moves(board)
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Draws the game on stdout as the session reports changes.
struct TerminalView {
    ai_player: Option<Player>,
    ai_delay: Duration,
    ai_pending: bool,
}

impl TerminalView {
    fn new(config: &AppConfig) -> Self {
        let ai_player = (*config.mode() == Mode::HumanVsAi).then_some(*config.ai_player());
        Self {
            ai_player,
            ai_delay: Duration::from_millis(*config.ai_delay_ms()),
            ai_pending: false,
        }
    }
}

impl SessionObserver for TerminalView {
    fn on_board_changed(&mut self, board: &Board) {
        if self.ai_pending {
            self.ai_pending = false;
            if !self.ai_delay.is_zero() {
                std::thread::sleep(self.ai_delay);
            }
        }
        println!("\n{board}\n");
    }

    fn on_turn_changed(&mut self, player: Player) {
        if self.ai_player == Some(player) {
            self.ai_pending = true;
            println!("Computer ({player}) is thinking...");
        } else {
            println!("Player {player}'s turn");
        }
    }

    fn on_game_ended(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won(player) if self.ai_player == Some(player) => {
                println!("The computer ({player}) wins!");
            }
            GameOutcome::Won(player) => println!("Player {player} wins!"),
            _ => println!("It's a draw!"),
        }
        println!("Type `reset` to play again or `quit` to leave.");
    }
}

/// Runs an interactive game on stdin/stdout until `quit` or end of input.
#[instrument(skip(config))]
pub fn run(config: &AppConfig) -> Result<()> {
    let oracle = match config.seed() {
        Some(seed) => MoveOracle::seeded(*seed),
        None => MoveOracle::new(),
    };
    let mut session = SessionController::with_oracle(config.session_config(), oracle);
    session.subscribe(TerminalView::new(config));

    println!(
        "oxo: {} ({})\n{}",
        config.mode(),
        config.difficulty(),
        help_text()
    );
    session.reset()?;
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match Input::parse(&line) {
            Some(Input::Place(position)) => {
                let player = session.to_move();
                if let Err(e) = session.submit_move(position.to_index(), player) {
                    if e.kind() == ErrorKind::NoMoveAvailable {
                        return Err(e.into());
                    }
                    warn!(%position, error = %e, "Move rejected");
                    println!("{e}");
                    if e.kind() == ErrorKind::InvalidMove {
                        println!("Free cells: {}", free_cells(session.board()));
                    }
                }
            }
            Some(Input::Reset) => {
                session.reset()?;
            }
            Some(Input::Help) => println!("{}", help_text()),
            Some(Input::Quit) => break,
            None if line.trim().is_empty() => {}
            None => println!("Unrecognised input `{}`. Type `help` for commands.", line.trim()),
        }
        prompt()?;
    }

    info!(moves = session.history().len(), outcome = %session.outcome(), "Leaving game");
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("reset"), Some(Input::Reset));
        assert_eq!(Input::parse(" Q "), Some(Input::Quit));
        assert_eq!(Input::parse("help"), Some(Input::Help));
    }

    #[test]
    fn test_parse_cells() {
        assert_eq!(Input::parse("5"), Some(Input::Place(Position::Center)));
        assert_eq!(Input::parse("Top-Left"), Some(Input::Place(Position::TopLeft)));
        assert_eq!(Input::parse("0"), None);
        assert_eq!(Input::parse("banana"), None);
    }

    #[test]
    fn test_help_lists_modes_and_difficulties() {
        let help = help_text();
        assert!(help.contains("human-vs-human, human-vs-ai"));
        assert!(help.contains("easy, medium, hard"));
    }

    #[test]
    fn test_free_cells_lists_empty_positions() {
        let board: Board = "XOX .O. XOX".parse().unwrap();
        assert_eq!(free_cells(&board), "Middle-left, Middle-right");
        assert_eq!(free_cells(&Board::new()).split(", ").count(), 9);
    }

    #[test]
    fn test_view_tracks_computer_turn() {
        let config = AppConfig::default().with_overrides(None, None, None, Some(0), None);
        let mut view = TerminalView::new(&config);
        assert_eq!(view.ai_player, Some(Player::O));

        view.on_turn_changed(Player::O);
        assert!(view.ai_pending);
        view.on_board_changed(&Board::new());
        assert!(!view.ai_pending);

        view.on_turn_changed(Player::X);
        assert!(!view.ai_pending);
    }

    #[test]
    fn test_view_has_no_computer_in_two_player_mode() {
        let config =
            AppConfig::default().with_overrides(Some(Mode::HumanVsHuman), None, None, None, None);
        let mut view = TerminalView::new(&config);
        view.on_turn_changed(Player::O);
        assert!(!view.ai_pending);
    }
}
