//! Square grid of marks.

use crate::types::{Coordinate, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An `N x N` board stored in row-major order.
///
/// Every coordinate has exactly one square for the life of the board; only
/// the marks change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows. [`GameConfig::validate`] bounds
    /// the size before an engine builds its board.
    ///
    /// [`GameConfig::validate`]: crate::GameConfig::validate
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if `coordinate` lies on the board.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.size && coordinate.col < self.size
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        self.contains(coordinate)
            .then(|| coordinate.row * self.size + coordinate.col)
    }

    /// Gets the square at `coordinate`.
    pub fn get(&self, coordinate: Coordinate) -> Option<&Square> {
        self.index(coordinate).map(|i| &self.squares[i])
    }

    /// Overwrites the square at `coordinate`.
    ///
    /// Returns false and leaves the board unchanged when out of bounds.
    pub fn set(&mut self, coordinate: Coordinate, square: Square) -> bool {
        match self.index(coordinate) {
            Some(i) => {
                self.squares[i] = square;
                true
            }
            None => false,
        }
    }

    /// True if the square at `coordinate` exists and is unplayed.
    pub fn is_empty(&self, coordinate: Coordinate) -> bool {
        matches!(self.get(coordinate), Some(Square::Empty))
    }

    /// True if every square carries a label.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Resets every square to empty.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over `(coordinate, square)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &Square)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, square)| (Coordinate::new(i / self.size, i % self.size), square))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(label: &str) -> Square {
        Square::Marked(label.to_string())
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.squares().len(), 16);
        assert!(board.squares().iter().all(Square::is_empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3);
        assert!(board.set(Coordinate::new(1, 2), mark("X")));
        assert_eq!(board.get(Coordinate::new(1, 2)), Some(&mark("X")));
        assert!(!board.is_empty(Coordinate::new(1, 2)));
        assert!(board.is_empty(Coordinate::new(2, 1)));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(3);
        assert_eq!(board.get(Coordinate::new(3, 0)), None);
        assert!(!board.set(Coordinate::new(0, 3), mark("X")));
        assert!(!board.is_empty(Coordinate::new(0, 3)));
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_cells_are_row_major() {
        let board = Board::new(2);
        let coords: Vec<_> = board.cells().map(|(c, _)| c).collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(2);
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            board.set(Coordinate::new(row, col), mark("O"));
        }
        assert!(board.is_full());
        board.clear();
        assert_eq!(board, Board::new(2));
    }
}
