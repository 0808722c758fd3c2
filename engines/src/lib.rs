//! Othello Engine
//!
//! Move selection for the computer-controlled side:
//! - `evaluation`: static positional weight table and board scoring
//! - `minimax`: fixed-depth minimax with alpha-beta pruning
//! - `config`: search depth settings
//!
//! With the `python` feature the crate also builds the `othello_engines`
//! Python extension module (see `bindings`).

pub mod config;
pub mod evaluation;
pub mod minimax;

#[cfg(feature = "python")]
pub mod bindings;

pub use config::{SearchConfig, DEFAULT_DEPTH};
pub use evaluation::{evaluate, POSITION_WEIGHTS};
pub use minimax::{best_move, compute_move, compute_move_scores, search, SearchOutcome};
