//! Settings for the terminal front-end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use oxo_engine::{Difficulty, Mode, Player, SessionConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings loaded from an optional TOML file and overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Who plays each side.
    mode: Mode,

    /// Strength of the computer side.
    difficulty: Difficulty,

    /// Side played by the computer.
    ai_player: Player,

    /// Pause before the computer's move is shown, in milliseconds.
    ai_delay_ms: u64,

    /// Seed for the computer's random choices; OS entropy when absent.
    seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            mode: session.mode,
            difficulty: session.difficulty,
            ai_player: session.ai_player,
            ai_delay_ms: 300,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if one is given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces every field for which a command-line value was given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<Mode>,
        difficulty: Option<Difficulty>,
        ai_player: Option<Player>,
        ai_delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(ai_player) = ai_player {
            self.ai_player = ai_player;
        }
        if let Some(ai_delay_ms) = ai_delay_ms {
            self.ai_delay_ms = ai_delay_ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Settings handed to the session controller.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            mode: self.mode,
            difficulty: self.difficulty,
            ai_player: self.ai_player,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
