//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant in the rotation.
///
/// The label is the player's identity and the mark it leaves on the board.
/// The color is display metadata; the engine never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier, also used as the board mark.
    label: String,
    /// Display color (e.g. "red").
    color: String,
}

impl Player {
    /// Creates a new player.
    #[instrument(skip_all, fields(label = %label.as_ref()))]
    pub fn new(label: impl AsRef<str>, color: impl Into<String>) -> Self {
        Self {
            label: label.as_ref().to_string(),
            color: color.into(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A 0-indexed board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unplayed square.
    #[default]
    Empty,
    /// Square carrying a player's label.
    Marked(String),
}

impl Square {
    /// Returns the label on this square, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Square::Empty => None,
            Square::Marked(label) => Some(label),
        }
    }

    /// True if nobody has played here.
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// A move submitted by the caller: a label placed at a coordinate.
///
/// The caller stamps the mover's label before submission; the engine does
/// not check it against the current player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    /// Label of the player making the move.
    pub label: String,
}

impl Move {
    /// Creates a new move.
    #[instrument(skip(label))]
    pub fn new(row: usize, col: usize, label: impl Into<String>) -> Self {
        Self {
            row,
            col,
            label: label.into(),
        }
    }

    /// Creates a move for `player` at `coordinate`.
    pub fn by(player: &Player, coordinate: Coordinate) -> Self {
        Self::new(coordinate.row, coordinate.col, player.label().as_str())
    }

    /// Returns the target coordinate.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.label, self.coordinate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_label() {
        assert_eq!(Square::Empty.label(), None);
        assert_eq!(Square::Marked("X".to_string()).label(), Some("X"));
        assert!(Square::default().is_empty());
    }

    #[test]
    fn test_move_coordinate() {
        let mov = Move::new(1, 2, "O");
        assert_eq!(mov.coordinate(), Coordinate::new(1, 2));
        assert_eq!(mov.to_string(), "O -> (1, 2)");
    }

    #[test]
    fn test_move_by_player() {
        let player = Player::new("X", "red");
        let mov = Move::by(&player, (2, 0).into());
        assert_eq!(mov, Move::new(2, 0, "X"));
    }
}
