//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything a frontend needs to run a two-player
//! game of tic-tac-toe, split into three pieces:
//!
//! - **State store**: [`Game`] owns the board and whose turn it is.
//! - **Rules engine**: the [`rules`] module derives winner/draw status
//!   from a board snapshot with pure functions.
//! - **Projections**: status messages and per-square labels for display,
//!   recomputed from state on every call so they can never lag.
//!
//! There is no I/O here. Frontends observe state through accessors and
//! forward user intents through [`Game::click`] and [`Game::reset`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.click(Position::Center);
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{ClickError, Game, RESET_LABEL};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
