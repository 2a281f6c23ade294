//! Game engine: board, rotation, win detection and scoring.
//!
//! The engine is driven synchronously by a caller (typically a UI). A turn
//! is: stamp the current player's label on a [`Move`], check
//! [`GameEngine::is_valid_move`], call [`GameEngine::process_move`], then
//! either announce the result ([`GameEngine::has_winner`] /
//! [`GameEngine::is_tied`]) or call [`GameEngine::toggle_player`].
//! [`GameEngine::play`] bundles that sequence.

use crate::board::Board;
use crate::combos::{WinningCombo, winning_combos};
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::invariants::assert_invariants;
use crate::scoreboard::Scoreboard;
use crate::types::{Coordinate, Move, Player, Square};
use derive_more::Display;
use tracing::{debug, info, instrument, warn};

/// Current phase of the game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameStatus {
    /// Waiting for a move.
    #[display("In progress")]
    InProgress,
    /// A winning combo was completed.
    #[display("Player \"{}\" wins", _0)]
    Won(Player),
    /// Every square is marked and nobody won.
    #[display("Tie")]
    Tied,
}

/// Result of a turn played through [`GameEngine::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The mover won.
    Won(Player),
    /// The board filled up without a winner.
    Tied,
    /// The game continues with this player to move.
    Next(Player),
}

/// Tic-tac-toe game engine with an in-session scoreboard.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: Vec<Player>,
    current: usize,
    has_winner: bool,
    winning_combo: Vec<Coordinate>,
    combos: Vec<WinningCombo>,
    scoreboard: Scoreboard,
}

impl GameEngine {
    /// Creates an engine for `players` (in turn order) on a `board_size` board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on an empty player list, a board size outside
    /// `1..=MAX_BOARD_SIZE`, an empty label, or duplicate labels.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, ConfigError> {
        Self::from_config(&GameConfig::new(players, board_size))
    }

    /// Creates an engine from a validated configuration.
    #[instrument(skip(config), fields(board_size = config.board_size()))]
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let engine = Self::build(config);
        info!(
            first = %engine.current_player(),
            combos = engine.combos.len(),
            "Game engine created"
        );
        Ok(engine)
    }

    fn build(config: &GameConfig) -> Self {
        let board_size = *config.board_size();
        Self {
            board: Board::new(board_size),
            combos: winning_combos(board_size),
            scoreboard: Scoreboard::new(config.players()),
            players: config.players().clone(),
            current: 0,
            has_winner: false,
            winning_combo: Vec::new(),
        }
    }

    /// True if the move's square is on the board and empty, and nobody has won.
    ///
    /// The move's label is not checked against the current player.
    #[instrument(skip(self, mov), fields(mov = %mov))]
    pub fn is_valid_move(&self, mov: &Move) -> bool {
        !self.has_winner && self.board.is_empty(mov.coordinate())
    }

    fn check_move(&self, mov: &Move) -> Result<(), MoveError> {
        let coordinate = mov.coordinate();
        if !self.board.contains(coordinate) {
            return Err(MoveError::OutOfBounds(coordinate, self.board.size()));
        }
        if self.has_winner {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(coordinate) {
            return Err(MoveError::SquareOccupied(coordinate));
        }
        if mov.label.is_empty() {
            return Err(MoveError::Unlabeled(coordinate));
        }
        Ok(())
    }

    /// Places the move's label and checks every combo for a win.
    ///
    /// Combos are checked rows, columns, first diagonal, second diagonal; the
    /// first uniformly marked one wins and credits the current player. The
    /// rotation is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without changing any state when the move is
    /// out of bounds, targets a marked square, comes after a win, or has
    /// no label.
    #[instrument(skip(self, mov), fields(mov = %mov))]
    pub fn process_move(&mut self, mov: Move) -> Result<(), MoveError> {
        if let Err(e) = self.check_move(&mov) {
            warn!(error = %e, "Rejected move");
            return Err(e);
        }

        let coordinate = mov.coordinate();
        self.board.set(coordinate, Square::Marked(mov.label));
        debug!(%coordinate, "Square marked");

        let winner = self
            .combos
            .iter()
            .find(|combo| combo.uniform_label(&self.board).is_some());
        if let Some(combo) = winner {
            self.has_winner = true;
            self.winning_combo = combo.coordinates().to_vec();
            let label = self.players[self.current].label();
            let score = self.scoreboard.increase_score(label);
            info!(winner = %label, ?score, combo = ?self.winning_combo, "Win declared");
        } else if self.board.is_full() {
            info!("Board full without a winner");
        }

        assert_invariants(self);
        Ok(())
    }

    /// True once a winning combo has been completed.
    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// True if nobody has won and every square is marked.
    pub fn is_tied(&self) -> bool {
        !self.has_winner && self.board.is_full()
    }

    /// Current phase of the game.
    pub fn status(&self) -> GameStatus {
        if self.has_winner {
            GameStatus::Won(self.current_player().clone())
        } else if self.board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Advances to the next player, wrapping after the last.
    #[instrument(skip(self))]
    pub fn toggle_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(current = %self.current_player(), "Player toggled");
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// Rotates to the next player only when the move neither won nor tied
    /// the game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the move is not valid; nothing changes.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Turn, MoveError> {
        let mov = Move::by(self.current_player(), Coordinate::new(row, col));
        self.process_move(mov)?;

        if self.is_tied() {
            Ok(Turn::Tied)
        } else if self.has_winner() {
            Ok(Turn::Won(self.current_player().clone()))
        } else {
            self.toggle_player();
            Ok(Turn::Next(self.current_player().clone()))
        }
    }

    /// Clears the board and winner state for another round.
    ///
    /// Scores and the current player are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.has_winner = false;
        self.winning_combo.clear();
        info!(current = %self.current_player(), "Game reset");
        assert_invariants(self);
    }

    /// Zeroes every player's score.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
        info!("Scores reset");
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rows (and columns) on the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The combo that won the game; empty until someone wins.
    pub fn winning_combo(&self) -> &[Coordinate] {
        &self.winning_combo
    }

    /// Every winning combo, in evaluation order.
    pub fn winning_combos(&self) -> &[WinningCombo] {
        &self.combos
    }

    /// The session scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::build(&GameConfig::default())
    }
}
