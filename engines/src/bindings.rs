/// PyO3 bindings for the Othello engine
/// Exposes the Rust game state and minimax search to Python
use ndarray::Array2;
use numpy::{PyArray1, PyArray2};
use othello_core::{Board, Coordinate, GameState, Player, CELL_COUNT};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::DEFAULT_DEPTH;
use crate::minimax::best_move;

fn player_from_code(code: u8) -> PyResult<Player> {
    match code {
        1 => Ok(Player::Dark),
        2 => Ok(Player::Light),
        _ => Err(PyValueError::new_err(format!(
            "Player must be 1 (Dark) or 2 (Light), got {}",
            code
        ))),
    }
}

fn action_from_coordinate(coord: Option<Coordinate>) -> Option<usize> {
    coord.map(|c| c.index())
}

/// Python wrapper for an Othello game
///
/// The wrapper does not sequence turns: when the player to move has no
/// legal move, call `pass_turn()`; stop once `get_winner()` reports an end.
#[pyclass]
pub struct OthelloGame {
    state: GameState,
}

#[pymethods]
impl OthelloGame {
    /// Create a new Othello game with the standard initial setup
    #[new]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Reset the game to the initial position, Dark to move
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }

    /// Play a move for the current player
    ///
    /// Args:
    ///     action (int): Position on the board (0-63), where action = row * 8 + col
    ///
    /// Returns:
    ///     tuple: (valid, pieces_flipped, game_over)
    ///
    /// Raises:
    ///     ValueError: If action is out of range [0, 63]
    pub fn step(&mut self, action: usize) -> PyResult<(bool, u8, bool)> {
        let coord = Coordinate::from_index(action).ok_or_else(|| {
            PyValueError::new_err(format!(
                "Action {} is out of range. Must be between 0 and 63 (inclusive).",
                action
            ))
        })?;

        let mover = self.state.current_player();
        match self.state.apply_move(mover, coord) {
            Ok(flipped) => Ok((true, flipped, self.state.is_terminal())),
            // Rejected moves are reported, not raised
            Err(_) => Ok((false, 0, self.state.is_terminal())),
        }
    }

    /// Hand the turn to the opponent without moving
    pub fn pass_turn(&mut self) {
        self.state.pass_turn();
    }

    /// Board as an (8, 8) uint8 array: 0 = Empty, 1 = Dark, 2 = Light
    pub fn get_board<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray2<u8>> {
        let state = self.state.board().to_flat();
        let array = Array2::from_shape_fn((8, 8), |(row, col)| state[row * 8 + col]);

        Ok(PyArray2::from_owned_array(py, array))
    }

    /// Legal moves of the current player as a (64,) bool array
    pub fn get_valid_moves<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<bool>> {
        let moves = self.state.legal_move_mask(self.state.current_player());
        Ok(PyArray1::from_slice(py, &moves))
    }

    /// Current player: 1 for Dark, 2 for Light
    pub fn get_current_player(&self) -> u8 {
        self.state.current_player().to_cell().code()
    }

    /// Piece counts (dark_count, light_count)
    pub fn get_piece_counts(&self) -> (usize, usize) {
        self.state.score()
    }

    /// Winner of the game
    ///
    /// Returns:
    ///     int: 1 = Dark wins, 2 = Light wins, 0 = Draw, 3 = Game not finished
    pub fn get_winner(&self) -> u8 {
        if !self.state.is_terminal() {
            return 3;
        }

        match self.state.winner() {
            Some(player) => player.to_cell().code(),
            None => 0,
        }
    }

    /// Engine move for the current player, or None when it must pass
    #[pyo3(signature = (depth = DEFAULT_DEPTH))]
    pub fn best_move(&self, depth: u32) -> Option<usize> {
        action_from_coordinate(best_move(&self.state, self.state.current_player(), depth))
    }
}

/// Compute the engine move for an arbitrary position
///
/// Args:
///     board (list): Flat board state as 64 elements (0=Empty, 1=Dark, 2=Light)
///     player (int): Side to move (1=Dark, 2=Light)
///     depth (int): Search depth in plies
///
/// Returns:
///     int | None: Move index (0-63), or None if the player has no legal move
#[pyfunction]
#[pyo3(signature = (board, player, depth = DEFAULT_DEPTH))]
fn compute_move(board: Vec<u8>, player: u8, depth: u32) -> PyResult<Option<usize>> {
    let flat: [u8; CELL_COUNT] = board.as_slice().try_into().map_err(|_| {
        PyValueError::new_err(format!(
            "Board must have exactly 64 elements, got {}",
            board.len()
        ))
    })?;

    let player = player_from_code(player)?;
    let board = Board::from_flat(&flat).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let state = GameState::from_board(board, player);

    Ok(action_from_coordinate(best_move(&state, player, depth)))
}

/// Python module definition
///
/// This module can be imported in Python as `othello_engines`
#[pymodule]
fn othello_engines(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<OthelloGame>()?;
    m.add_function(wrap_pyfunction!(compute_move, m)?)?;
    Ok(())
}
