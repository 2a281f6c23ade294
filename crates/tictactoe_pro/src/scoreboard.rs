//! Per-player win tally for a session.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Win counts keyed by player label.
///
/// Scores only go up, except through [`Scoreboard::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    players: Vec<Player>,
    scores: HashMap<String, u32>,
}

impl Scoreboard {
    /// Creates a scoreboard with a zero score for every player.
    #[instrument(skip_all, fields(players = players.len()))]
    pub fn new(players: &[Player]) -> Self {
        Self {
            players: players.to_vec(),
            scores: players.iter().map(|p| (p.label().clone(), 0)).collect(),
        }
    }

    /// Adds one win for `label`, returning the new score.
    ///
    /// Returns `None` for a label that is not on the board.
    #[instrument(skip(self))]
    pub fn increase_score(&mut self, label: &str) -> Option<u32> {
        let score = self.scores.get_mut(label)?;
        *score += 1;
        debug!(score = *score, "Score increased");
        Some(*score)
    }

    /// Returns the score for `label`.
    pub fn get_score(&self, label: &str) -> Option<u32> {
        self.scores.get(label).copied()
    }

    /// Each player with their score, in configured order.
    pub fn standings(&self) -> impl Iterator<Item = (&Player, u32)> + '_ {
        self.players
            .iter()
            .map(|p| (p, self.get_score(p.label()).unwrap_or_default()))
    }

    /// Number of tracked labels.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if no players are tracked.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Zeroes every score.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.scores.values_mut().for_each(|s| *s = 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Vec<Player> {
        vec![Player::new("X", "red"), Player::new("O", "green")]
    }

    #[test]
    fn test_starts_at_zero() {
        let board = Scoreboard::new(&players());
        assert_eq!(board.get_score("X"), Some(0));
        assert_eq!(board.get_score("O"), Some(0));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_increase_score() {
        let mut board = Scoreboard::new(&players());
        assert_eq!(board.increase_score("O"), Some(1));
        assert_eq!(board.increase_score("O"), Some(2));
        assert_eq!(board.get_score("O"), Some(2));
        assert_eq!(board.get_score("X"), Some(0));
    }

    #[test]
    fn test_unknown_label() {
        let mut board = Scoreboard::new(&players());
        assert_eq!(board.increase_score("Z"), None);
        assert_eq!(board.get_score("Z"), None);
    }

    #[test]
    fn test_standings_keep_order() {
        let mut board = Scoreboard::new(&players());
        board.increase_score("O");
        let standings: Vec<_> = board
            .standings()
            .map(|(p, score)| (p.label().as_str(), score))
            .collect();
        assert_eq!(standings, vec![("X", 0), ("O", 1)]);
    }

    #[test]
    fn test_reset() {
        let mut board = Scoreboard::new(&players());
        board.increase_score("X");
        board.reset();
        assert_eq!(board.get_score("X"), Some(0));
        assert_eq!(board.len(), 2);
    }
}
