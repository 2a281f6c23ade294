//! Application state for the terminal front end.
//!
//! The app owns the engine and translates key presses into engine calls.
//! It keeps no game state of its own beyond the cursor and the status line.

use crossterm::event::KeyCode;
use tictactoe_pro::{Coordinate, GameEngine, Move};
use tracing::{debug, info, instrument};

/// Cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous row.
    Up,
    /// Next row.
    Down,
    /// Previous column.
    Left,
    /// Next column.
    Right,
}

/// Status line text with an optional player color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Text to show.
    pub text: String,
    /// Color name understood by the renderer; `None` for the default.
    pub color: Option<String>,
}

impl Message {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    fn colored(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Some(color.into()),
        }
    }
}

/// Terminal application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Coordinate,
    message: Message,
    should_quit: bool,
}

impl App {
    /// Creates the app around an engine.
    pub fn new(engine: GameEngine) -> Self {
        let center = engine.board_size() / 2;
        Self {
            engine,
            cursor: Coordinate::new(center, center),
            message: Message::plain("Let's Play!"),
            should_quit: false,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Current status line.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// True once the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatches a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.reset_board(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(Direction::Right),
            _ => {}
        }
    }

    /// Moves the cursor one square, stopping at the board edge.
    pub fn move_cursor(&mut self, direction: Direction) {
        let last = self.engine.board_size().saturating_sub(1);
        let Coordinate { row, col } = self.cursor;
        self.cursor = match direction {
            Direction::Up => Coordinate::new(row.saturating_sub(1), col),
            Direction::Down => Coordinate::new((row + 1).min(last), col),
            Direction::Left => Coordinate::new(row, col.saturating_sub(1)),
            Direction::Right => Coordinate::new(row, (col + 1).min(last)),
        };
    }

    /// Plays the current player's mark under the cursor.
    ///
    /// Invalid squares are ignored.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn play(&mut self) {
        let mov = Move::by(self.engine.current_player(), self.cursor);
        if !self.engine.is_valid_move(&mov) {
            debug!("Ignoring invalid square");
            return;
        }
        if let Err(e) = self.engine.process_move(mov) {
            debug!(error = %e, "Move rejected");
            return;
        }

        let player = self.engine.current_player();
        if self.engine.is_tied() {
            info!("Round tied");
            self.message = Message::colored("It's a Tie!", "blue");
        } else if self.engine.has_winner() {
            info!(winner = %player, "Round won");
            self.message = Message::colored(
                format!("Player \"{}\" Wins!", player.label()),
                player.color().as_str(),
            );
        } else {
            self.engine.toggle_player();
            let next = self.engine.current_player().label();
            self.message = Message::plain(format!("{next}'s Turn"));
        }
    }

    /// Starts another round, keeping the scores.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.engine.reset_game();
        self.message = Message::plain("Get Ready!");
    }
}
