//! Game setup configuration.

use crate::error::ConfigError;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default board size.
pub const BOARD_SIZE: usize = 3;

/// Largest accepted board size.
pub const MAX_BOARD_SIZE: usize = 64;

/// Players and board size, fixed for the life of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rows (and columns) on the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Players in rotation order.
    #[serde(default = "default_players")]
    players: Vec<Player>,
}

#[instrument]
fn default_players() -> Vec<Player> {
    vec![Player::new("X", "red"), Player::new("O", "green")]
}

#[instrument]
fn default_board_size() -> usize {
    BOARD_SIZE
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Self {
        Self {
            board_size,
            players,
        }
    }

    /// Returns this configuration with a different board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: Self =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        info!(
            players = config.players.len(),
            board_size = config.board_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Serializes this configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Checks the players and board size.
    ///
    /// # Errors
    ///
    /// Fails on an empty player list, a board size outside
    /// `1..=MAX_BOARD_SIZE`, an empty label, or a duplicated label.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.board_size < 1 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.board_size));
        }

        let mut seen = HashSet::new();
        for player in &self.players {
            if player.label().is_empty() {
                return Err(ConfigError::EmptyLabel);
            }
            if !seen.insert(player.label().as_str()) {
                return Err(ConfigError::DuplicateLabel(player.label().clone()));
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_players(), default_board_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(config.players()[0], Player::new("X", "red"));
        assert_eq!(config.players()[1], Player::new("O", "green"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_no_players() {
        let config = GameConfig::new(Vec::new(), 3);
        assert_eq!(config.validate(), Err(ConfigError::NoPlayers));
    }

    #[test]
    fn test_rejects_zero_size() {
        let config = GameConfig::default().with_board_size(0);
        assert_eq!(config.validate(), Err(ConfigError::BoardTooSmall(0)));
    }

    #[test]
    fn test_rejects_oversized_board() {
        let largest = GameConfig::default().with_board_size(MAX_BOARD_SIZE);
        assert!(largest.validate().is_ok());

        for size in [MAX_BOARD_SIZE + 1, 1 << 32, usize::MAX] {
            let config = GameConfig::default().with_board_size(size);
            assert_eq!(config.validate(), Err(ConfigError::BoardTooLarge(size)));
        }
    }

    #[test]
    fn test_rejects_duplicate_labels() {
        let config = GameConfig::new(
            vec![Player::new("X", "red"), Player::new("X", "blue")],
            3,
        );
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateLabel("X".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_label() {
        let config = GameConfig::new(vec![Player::new("", "red")], 3);
        assert_eq!(config.validate(), Err(ConfigError::EmptyLabel));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: GameConfig = toml::from_str("board_size = 5").unwrap();
        assert_eq!(*config.board_size(), 5);
        assert_eq!(config.players().len(), 2);

        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parse_players() {
        let text = r#"
            board_size = 4

            [[players]]
            label = "A"
            color = "blue"

            [[players]]
            label = "B"
            color = "yellow"

            [[players]]
            label = "C"
            color = "magenta"
        "#;
        let config: GameConfig = toml::from_str(text).unwrap();
        assert_eq!(config.players().len(), 3);
        assert_eq!(config.players()[2].color(), "magenta");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_toml_reloads() {
        let config = GameConfig::default().with_board_size(5);
        let text = config.to_toml().unwrap();
        let reloaded: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_serialize_error_message() {
        let err = ConfigError::Serialize("unsupported value".into());
        assert_eq!(err.to_string(), "Failed to serialize config: unsupported value");
    }
}
