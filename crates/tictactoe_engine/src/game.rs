//! The game state store: board plus turn, with the move transition.

use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Assistive-technology label for the reset control.
pub const RESET_LABEL: &str = "Reset the game";

/// Reason a click was rejected.
///
/// Frontends normally never see these: [`Game::click`] swallows them,
/// because clicking an occupied square or a finished game is defined as
/// a no-op rather than an error. The strict [`Game::try_click`] form
/// surfaces them for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ClickError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for ClickError {}

/// Complete game state: the board plus whose turn is next.
///
/// `to_move` alternates strictly after each successful move. Outcome is
/// never stored; [`Game::status`] derives it from the board on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Derives the current game status from the board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Attempts to place the current player's mark at `pos`.
    ///
    /// On success the mark is placed, the turn flips, and the freshly
    /// derived status is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClickError::GameOver`] if the game has ended, or
    /// [`ClickError::SquareOccupied`] if the square is taken. The state
    /// is untouched in both cases.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn try_click(&mut self, pos: Position) -> Result<GameStatus, ClickError> {
        if rules::is_game_over(&self.board) {
            return Err(ClickError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(ClickError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();

        let status = self.status();
        debug!(?status, board = %self.board.display(), "Move applied");
        Ok(status)
    }

    /// Handles a click intent on a square.
    ///
    /// Invalid clicks (occupied square, finished game) are a silent
    /// no-op, matching how a UI treats a click on a disabled control.
    /// Always returns the current derived status.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> GameStatus {
        if let Err(reason) = self.try_click(pos) {
            debug!(%reason, "Click ignored");
        }
        self.status()
    }

    /// Resets to the initial state: empty board, X to move.
    ///
    /// Works from any state, including terminal ones.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }

    /// Whether the square at `pos` can currently be played.
    ///
    /// False when the square is occupied or the game is over; the UI
    /// disables the control in either case.
    pub fn is_enabled(&self, pos: Position) -> bool {
        self.board.is_empty(pos) && !rules::is_game_over(&self.board)
    }

    /// Status line for display.
    pub fn status_message(&self) -> String {
        match self.status() {
            GameStatus::Won(winner) => format!("🎉 Player {winner} wins!"),
            GameStatus::Draw => "🤝 It's a draw!".to_string(),
            GameStatus::InProgress => format!("Player {}'s turn", self.to_move),
        }
    }

    /// Assistive-technology label for the square at `pos`.
    ///
    /// `"Square N, X"`, `"Square N, O"`, or `"Square N, empty"`, with N
    /// counted from 1.
    pub fn square_label(&self, pos: Position) -> String {
        let content = match self.board.get(pos) {
            Square::Empty => "empty".to_string(),
            Square::Occupied(player) => player.to_string(),
        };
        format!("Square {}, {}", pos.to_index() + 1, content)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_initial_state() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_click_places_mark_and_flips_turn() {
        let mut game = Game::new();
        game.click(Position::Center);
        assert_eq!(
            game.board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_click_is_noop() {
        let mut game = Game::new();
        game.click(Position::Center);
        let before = game.clone();

        game.click(Position::Center);
        assert_eq!(game, before);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_try_click_reports_rejection() {
        let mut game = Game::new();
        game.click(Position::Center);
        assert_eq!(
            game.try_click(Position::Center),
            Err(ClickError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_status_message_turn() {
        let mut game = Game::new();
        assert_eq!(game.status_message(), "Player X's turn");
        game.click(Position::Center);
        assert_eq!(game.status_message(), "Player O's turn");
    }

    #[test]
    fn test_square_label() {
        let mut game = Game::new();
        assert_eq!(game.square_label(Position::TopLeft), "Square 1, empty");
        game.click(Position::TopLeft);
        assert_eq!(game.square_label(Position::TopLeft), "Square 1, X");
        assert_eq!(game.square_label(Position::BottomRight), "Square 9, empty");
    }
}
