//! Error types for game setup and move handling.

use crate::types::Coordinate;
use derive_more::{Display, Error};

/// Invalid construction parameters or an unreadable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// No players were configured.
    #[display("At least one player is required")]
    NoPlayers,

    /// Board size below 1.
    #[display("Board size must be at least 1, got {}", _0)]
    BoardTooSmall(#[error(not(source))] usize),

    /// Board size above the supported maximum.
    #[display("Board size must be at most {}, got {}", crate::config::MAX_BOARD_SIZE, _0)]
    BoardTooLarge(#[error(not(source))] usize),

    /// Two players share a label.
    #[display("Duplicate player label {:?}", _0)]
    DuplicateLabel(#[error(not(source))] String),

    /// A player has an empty label.
    #[display("Player labels must not be empty")]
    EmptyLabel,

    /// The configuration file could not be read.
    #[display("Failed to read config file: {}", _0)]
    Read(#[error(not(source))] String),

    /// The configuration file could not be parsed.
    #[display("Failed to parse config: {}", _0)]
    Parse(#[error(not(source))] String),

    /// The configuration could not be written as TOML.
    #[display("Failed to serialize config: {}", _0)]
    Serialize(#[error(not(source))] String),
}

/// A move the engine refuses to apply.
///
/// A rejected move leaves the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square already carries a label.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Coordinate),

    /// A winner has already been declared.
    #[display("Game is already over")]
    GameOver,

    /// The coordinate lies outside the board.
    #[display("Square {} is outside the {}x{} board", _0, _1, _1)]
    OutOfBounds(Coordinate, usize),

    /// The move carries no label.
    #[display("Move at {} has no player label", _0)]
    Unlabeled(#[error(not(source))] Coordinate),
}
