use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::Direction;
use super::grid::{self, TILE_SIZE};
use super::speed::{INITIAL_INTERVAL_MS, MIN_INTERVAL_MS};
use super::state::Cell;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Joystick dead-zone thresholds on the raw axis value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickConfig {
    /// Values below this count as full deflection towards the negative end
    pub low_threshold: i32,
    /// Values above this count as full deflection towards the positive end
    pub high_threshold: i32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            low_threshold: 10,
            high_threshold: 240,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Step interval a session starts with, in milliseconds
    pub initial_interval_ms: u32,
    /// Pause between game over and the next session, in milliseconds
    pub inter_session_delay_ms: u64,
    /// Seed for target placement; applied once per process
    pub seed: u64,
    /// Cell the head spawns on
    pub start: Cell,
    /// Direction the snake moves in when a session starts
    pub initial_direction: Direction,
    pub joystick: JoystickConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: INITIAL_INTERVAL_MS,
            inter_session_delay_ms: 1000,
            seed: 0,
            start: Cell::new(grid::snap_to_tile(100), grid::snap_to_tile(100)),
            initial_direction: Direction::Right,
            joystick: JoystickConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check that every value describes a playable session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_interval_ms < MIN_INTERVAL_MS {
            return Err(ConfigError::Invalid(format!(
                "initial_interval_ms must be at least {}, got {}",
                MIN_INTERVAL_MS, self.initial_interval_ms
            )));
        }

        if self.start.x % TILE_SIZE != 0 || self.start.y % TILE_SIZE != 0 {
            return Err(ConfigError::Invalid(format!(
                "start ({}, {}) is not aligned to the {}px tile grid",
                self.start.x, self.start.y, TILE_SIZE
            )));
        }

        if !grid::contains(self.start) {
            return Err(ConfigError::Invalid(format!(
                "start ({}, {}) is off the board",
                self.start.x, self.start.y
            )));
        }

        if self.joystick.low_threshold >= self.joystick.high_threshold {
            return Err(ConfigError::Invalid(format!(
                "joystick low_threshold ({}) must be below high_threshold ({})",
                self.joystick.low_threshold, self.joystick.high_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_interval_ms, 200);
        assert_eq!(config.start, Cell::new(100, 100));
        assert_eq!(config.initial_direction, Direction::Right);
        assert_eq!(config.seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            seed = 42
            initial_direction = "down"

            [joystick]
            low_threshold = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.initial_direction, Direction::Down);
        assert_eq!(config.joystick.low_threshold, 20);
        assert_eq!(config.joystick.high_threshold, 240);
        assert_eq!(config.inter_session_delay_ms, 1000);
    }

    #[test]
    fn test_invalid_start() {
        let mut config = GameConfig::default();
        config.start = Cell::new(105, 100);
        assert!(config.validate().is_err());

        config.start = Cell::new(240, 100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_thresholds_and_interval() {
        let err = GameConfig::from_toml_str("[joystick]\nlow_threshold = 250\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_toml_str("initial_interval_ms = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_toml_str("seed = \"zero\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_toml_file(Path::new("/nonexistent/grid_snake.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
