//! Static positional evaluation.
//!
//! Corners are permanently safe and score highest; the cells touching a
//! corner hand it to the opponent and score lowest; edges are worth a little;
//! the interior is close to neutral.

use othello_core::{GameState, Player, BOARD_SIZE};

/// Positional weights, symmetric under the board's horizontal and vertical
/// reflections. Edge cells are not symmetric across the diagonal: the top and
/// bottom edges hold 7.5 in their middle, the left and right edges 10.
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [[f64; BOARD_SIZE]; BOARD_SIZE] = [
    [100.0, -20.0, 10.0,  7.5,  7.5, 10.0, -20.0, 100.0],
    [-20.0, -50.0, -2.0, -2.0, -2.0, -2.0, -50.0, -20.0],
    [ 10.0,  -2.0, -1.0, -1.0, -1.0, -1.0,  -2.0,  10.0],
    [ 10.0,  -2.0, -1.0, -1.0, -1.0, -1.0,  -2.0,  10.0],
    [ 10.0,  -2.0, -1.0, -1.0, -1.0, -1.0,  -2.0,  10.0],
    [ 10.0,  -2.0, -1.0, -1.0, -1.0, -1.0,  -2.0,  10.0],
    [-20.0, -50.0, -2.0, -2.0, -2.0, -2.0, -50.0, -20.0],
    [100.0, -20.0, 10.0,  7.5,  7.5, 10.0, -20.0, 100.0],
];

/// Sum of weights of `perspective`'s pieces minus those of the opponent's.
/// Zero-sum: `evaluate(s, Dark) == -evaluate(s, Light)`.
pub fn evaluate(state: &GameState, perspective: Player) -> f64 {
    let board = state.board();
    let mut total = 0.0;

    for (row, weights) in POSITION_WEIGHTS.iter().enumerate() {
        for (col, &weight) in weights.iter().enumerate() {
            match board.get(row, col).owner() {
                Some(owner) if owner == perspective => total += weight,
                Some(_) => total -= weight,
                None => {}
            }
        }
    }

    total
}
