//! Application state: the game plus the keyboard cursor.

use crossterm::event::KeyCode;
use tictactoe_engine::{Game, Position};
use tracing::debug;

use super::input;

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
        }
    }

    /// The game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The square the keyboard cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line for the live status region.
    pub fn status_message(&self) -> String {
        self.game.status_message()
    }

    /// Label of the square under the cursor, e.g. "Square 5, empty".
    pub fn cursor_label(&self) -> String {
        self.game.square_label(self.cursor)
    }

    /// Forwards an activation intent for `pos` to the engine.
    ///
    /// The engine treats invalid activations (occupied square, finished
    /// game) as a no-op, so no validation happens here.
    pub fn activate(&mut self, pos: Position) {
        self.cursor = pos;
        let status = self.game.click(pos);
        debug!(?pos, ?status, "Square activated");
    }

    /// Handles a key press (quit is handled by the caller).
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            KeyCode::Char('r') => {
                self.game.reset();
                self.cursor = Position::Center;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_label_or_number(&c.to_string()) {
                    self.activate(pos);
                }
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
