//! Game configuration, loadable from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::square::Square;
use crate::error::ConfigError;
use crate::levels::{LevelCatalog, LevelSpec, STANDARD_LEVELS};
use crate::scoring::ScoringRules;

pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// The four knight home squares on a standard board.
pub const KNIGHT_START_SQUARES: [Square; 4] = [
    Square::new(0, 1),
    Square::new(0, 6),
    Square::new(7, 1),
    Square::new(7, 6),
];

/// Everything about a game that isn't decided at runtime.
///
/// Missing fields fall back to the standard game, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: u8,
    pub levels: Vec<LevelSpec>,
    pub scoring: ScoringRules,
    /// Candidate knight squares; one is picked at random when a game starts.
    pub start_squares: Vec<Square>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            levels: STANDARD_LEVELS.to_vec(),
            scoring: ScoringRules::default(),
            start_squares: KNIGHT_START_SQUARES.to_vec(),
        }
    }
}

impl GameConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!(path = %path.display(), levels = config.levels.len(), "loaded config");
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the board, level table and start squares against each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 3 {
            return Err(ConfigError::invalid(format!(
                "board size {} is too small (minimum 3)",
                self.board_size
            )));
        }
        let catalog = self.catalog()?;

        let free = self.board_size as u32 * self.board_size as u32 - 1;
        if let Some(spec) = catalog.iter().find(|s| s.queens > free) {
            return Err(ConfigError::invalid(format!(
                "level {} needs {} queens but the board has only {free} free squares",
                spec.number, spec.queens
            )));
        }

        if self.start_squares.is_empty() {
            return Err(ConfigError::invalid("no knight start squares"));
        }
        if let Some(sq) = self
            .start_squares
            .iter()
            .find(|sq| !sq.on_board(self.board_size))
        {
            return Err(ConfigError::invalid(format!(
                "start square {sq} is off a {0}x{0} board",
                self.board_size
            )));
        }
        Ok(())
    }

    pub fn catalog(&self) -> Result<LevelCatalog, ConfigError> {
        LevelCatalog::new(self.levels.clone())
    }
}
