//! Winning line generation and evaluation.

use crate::board::Board;
use crate::types::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line of `N` coordinates that wins when uniformly marked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningCombo(Vec<Coordinate>);

impl WinningCombo {
    /// Coordinates in line order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    /// Returns the label shared by every square on the line.
    ///
    /// `None` if any square is empty or two squares disagree.
    pub fn uniform_label<'a>(&self, board: &'a Board) -> Option<&'a str> {
        let mut squares = self.0.iter().map(|c| board.get(*c).and_then(|s| s.label()));
        let first = squares.next()??;
        squares.all(|label| label == Some(first)).then_some(first)
    }
}

/// Computes every winning line for an `N x N` board.
///
/// Order: rows top to bottom, columns left to right, the first diagonal
/// `(i, i)`, then the second diagonal `(i, N-1-i)`. Always `2N + 2` lines.
#[instrument]
pub fn winning_combos(size: usize) -> Vec<WinningCombo> {
    let rows = (0..size).map(|row| {
        (0..size)
            .map(|col| Coordinate::new(row, col))
            .collect::<Vec<_>>()
    });
    let columns = (0..size).map(|col| {
        (0..size)
            .map(|row| Coordinate::new(row, col))
            .collect::<Vec<_>>()
    });
    let first_diagonal: Vec<_> = (0..size).map(|i| Coordinate::new(i, i)).collect();
    let second_diagonal: Vec<_> = (0..size).map(|i| Coordinate::new(i, size - 1 - i)).collect();

    rows.chain(columns)
        .chain([first_diagonal, second_diagonal])
        .map(WinningCombo)
        .collect()
}
