//! Core types and game logic for Othello (Reversi)
//!
//! - [`board`]: cells, players, coordinates and the 8x8 grid
//! - [`rules`]: [`GameState`], move legality and directional flipping
//! - [`error`]: [`GameError`] for rejected moves and malformed input
//!
//! Turn sequencing is left to the caller: [`GameState::apply_move`] always
//! hands the turn to the opponent, and a caller whose mover has no legal
//! move calls [`GameState::pass_turn`] or stops on [`GameState::is_terminal`].

pub mod board;
pub mod error;
pub mod rules;

pub use board::{Board, Cell, Coordinate, Player, BOARD_SIZE, CELL_COUNT};
pub use error::{GameError, GameResult};
pub use rules::{GameState, DIRECTIONS};

/// Standard starting position with Dark to move
pub fn create_initial_state() -> GameState {
    GameState::new()
}
