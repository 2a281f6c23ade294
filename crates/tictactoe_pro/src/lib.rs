//! Tic-tac-toe game engine with an in-session scoreboard.
//!
//! The engine owns the board, the player rotation, win/tie detection and
//! the win tally. It performs no I/O and knows nothing about rendering: a
//! front end drives it one call at a time and draws what it reports.
//!
//! # Example
//!
//! ```
//! use tictactoe_pro::{GameEngine, Move, Player};
//!
//! let players = vec![Player::new("X", "red"), Player::new("O", "green")];
//! let mut game = GameEngine::new(players, 3)?;
//!
//! let mov = Move::new(1, 1, game.current_player().label().as_str());
//! if game.is_valid_move(&mov) {
//!     game.process_move(mov)?;
//!     if !game.has_winner() && !game.is_tied() {
//!         game.toggle_player();
//!     }
//! }
//! assert_eq!(game.current_player().label(), "O");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod combos;
mod config;
mod engine;
mod error;
mod invariants;
mod scoreboard;
mod types;

pub use board::Board;
pub use combos::{WinningCombo, winning_combos};
pub use config::{BOARD_SIZE, GameConfig, MAX_BOARD_SIZE};
pub use engine::{GameEngine, GameStatus, Turn};
pub use error::{ConfigError, MoveError};
pub use invariants::{
    BoardShapeInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    ScoreboardCoverageInvariant, WinnerConsistentInvariant,
};
pub use scoreboard::Scoreboard;
pub use types::{Coordinate, Move, Player, Square};
