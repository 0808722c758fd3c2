//! Minimax Engine - Alpha-Beta Pruning AI
//!
//! Fixed-depth minimax over the positional [`evaluate`] heuristic, with
//! alpha-beta pruning.
//!
//! Algorithm Details:
//! - The side the search runs for (the perspective player) never changes;
//!   every leaf is scored from its point of view.
//! - Nodes where the perspective player moves maximize, opponent nodes minimize.
//! - Moves are tried in row-major order and the first of several equal
//!   values wins, so the result is deterministic.
//! - A mover without legal moves passes: the pass consumes one ply and hands
//!   the node to the other side with the board unchanged.
//! - Every child owns its own copy of the game state.
//!
//! Pruning never changes the root value or the chosen move compared with a
//! plain minimax to the same depth.

use log::{debug, trace};
use othello_core::{Coordinate, GameState, Player, CELL_COUNT};

use crate::config::SearchConfig;
use crate::evaluation::evaluate;

/// Result of a root search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Backed-up value from the perspective player's point of view
    pub value: f64,
    /// Chosen move, `None` when the perspective player has to pass
    pub best_move: Option<Coordinate>,
    /// Nodes visited, leaves included
    pub nodes: u64,
}

/// Compute the best move for `player` using the configured depth
///
/// # Returns
/// The chosen coordinate, or None if `player` has no legal move (a pass)
pub fn compute_move(
    state: &GameState,
    player: Player,
    config: &SearchConfig,
) -> Option<Coordinate> {
    best_move(state, player, config.depth)
}

/// Best move for `player` searching `depth` plies
pub fn best_move(state: &GameState, player: Player, depth: u32) -> Option<Coordinate> {
    search(state, player, depth).best_move
}

/// Run the alpha-beta search from `state` on behalf of `perspective`
pub fn search(state: &GameState, perspective: Player, depth: u32) -> SearchOutcome {
    let mut searcher = Searcher {
        perspective,
        nodes: 0,
    };

    let (value, best_move) =
        searcher.alpha_beta(state, depth, true, f64::NEG_INFINITY, f64::INFINITY);

    match best_move {
        Some(coord) => debug!(
            "{:?} depth {}: best move {} value {} ({} nodes)",
            perspective, depth, coord, value, searcher.nodes
        ),
        None => debug!(
            "{:?} depth {}: no move, value {} ({} nodes)",
            perspective, depth, value, searcher.nodes
        ),
    }

    SearchOutcome {
        value,
        best_move,
        nodes: searcher.nodes,
    }
}

/// Backed-up value of every legal move for `player`
///
/// Each move is searched to `depth - 1` plies below it with a full window.
/// Illegal cells are `None`. Indexed as row * 8 + col.
pub fn compute_move_scores(
    state: &GameState,
    player: Player,
    depth: u32,
) -> [Option<f64>; CELL_COUNT] {
    let mut scores = [None; CELL_COUNT];
    let mut searcher = Searcher {
        perspective: player,
        nodes: 0,
    };

    for coord in state.legal_moves(player) {
        let mut child = *state;
        if child.apply_move(player, coord).is_err() {
            continue;
        }

        let (value, _) = searcher.alpha_beta(
            &child,
            depth.saturating_sub(1),
            false,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        trace!("{:?} move {} scores {}", player, coord, value);
        scores[coord.index()] = Some(value);
    }

    scores
}

struct Searcher {
    perspective: Player,
    nodes: u64,
}

impl Searcher {
    /// Alpha-beta pruning minimax implementation
    ///
    /// - Alpha: best value the maximizing side is already guaranteed
    /// - Beta: best value the minimizing side is already guaranteed
    /// - Once beta <= alpha the remaining siblings cannot matter
    fn alpha_beta(
        &mut self,
        state: &GameState,
        depth: u32,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<Coordinate>) {
        self.nodes += 1;

        if depth == 0 || state.is_terminal() {
            return (evaluate(state, self.perspective), None);
        }

        let mover = if maximizing {
            self.perspective
        } else {
            self.perspective.opponent()
        };

        let moves = state.legal_moves(mover);

        // Forced pass: same board, one ply used, other side to move
        if moves.is_empty() {
            let (value, _) = self.alpha_beta(state, depth - 1, !maximizing, alpha, beta);
            return (value, None);
        }

        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for coord in moves {
            let mut child = *state;
            if child.apply_move(mover, coord).is_err() {
                continue;
            }

            let (value, _) = self.alpha_beta(&child, depth - 1, !maximizing, alpha, beta);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(coord);
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(coord);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_value, best_move)
    }
}
