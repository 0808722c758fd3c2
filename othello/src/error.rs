//! Error types for the Othello rules engine

use thiserror::Error;

use crate::board::Player;

/// Errors that can occur while manipulating a game state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The target cell is occupied or brackets no opponent run
    #[error("Illegal move for {player:?} at ({row}, {col})")]
    IllegalMove { player: Player, row: usize, col: usize },

    /// A flat board contained a value other than 0, 1 or 2
    #[error("Invalid cell code {value} at index {index} (must be 0, 1 or 2)")]
    InvalidCellCode { index: usize, value: u8 },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
