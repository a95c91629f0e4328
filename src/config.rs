// Configuration module for reading Pursuit.toml
// Grid size, start positions, search horizon and driver pacing live here

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::PursuitError;
use crate::grid::Grid;
use crate::state::GameState;
use crate::types::Position;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub grid: GridConfig,
    pub game: GameConfig,
    pub search: SearchConfig,
    pub timing: TimingConfig,
    pub debug: DebugConfig,
}

/// Board dimensions
#[derive(Debug, Deserialize, Clone)]
pub struct GridConfig {
    pub size: i32,
}

/// Starting layout and match length
#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    pub escape: Position,
    pub pursued_start: Position,
    pub pursuer_start: Position,
    /// Full rounds (pursued + pursuer half-turns) before the match is abandoned
    pub max_turns: u32,
}

/// Search horizon in plies
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub depth: u8,
}

/// Driver pacing
#[derive(Debug, Deserialize, Clone)]
pub struct TimingConfig {
    pub half_turn_delay_ms: u64,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Pursuit.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Pursuit.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Pursuit.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Pursuit.toml
    pub fn default_hardcoded() -> Self {
        Config {
            grid: GridConfig { size: 5 },
            game: GameConfig {
                escape: Position::new(4, 0),
                pursued_start: Position::new(0, 0),
                pursuer_start: Position::new(4, 4),
                max_turns: 100,
            },
            search: SearchConfig { depth: 3 },
            timing: TimingConfig {
                half_turn_delay_ms: 500,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "pursuit_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!("Warning: Could not load Pursuit.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }

    /// Builds the grid and the initial state, checking every coordinate
    pub fn setup(&self) -> Result<(Grid, GameState), PursuitError> {
        let grid = Grid::new(self.grid.size)?;
        let state = GameState::new(
            &grid,
            self.game.pursued_start,
            self.game.pursuer_start,
            self.game.escape,
        )?;
        Ok((grid, state))
    }
}
