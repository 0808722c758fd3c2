//! Move legality and application.

use std::fmt;

use log::debug;

use crate::board::{Board, Cell, Coordinate, Player, BOARD_SIZE, CELL_COUNT};
use crate::error::{GameError, GameResult};

/// The eight compass directions as (row delta, col delta)
#[rustfmt::skip]
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A board plus the player whose turn it is
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct GameState {
    pub(crate) board: Board,
    current_player: Player,
}

impl GameState {
    /// Create a new game with the standard four center pieces, Dark to move
    pub fn new() -> Self {
        GameState {
            board: Board::initial(),
            current_player: Player::Dark,
        }
    }

    /// Build a state from an arbitrary board, e.g. one decoded with
    /// [`Board::from_flat`]
    pub fn from_board(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Check if `player` may place a piece at `coord`
    /// A move is legal if:
    /// 1. The cell is on the board and empty
    /// 2. At least one direction crosses one or more opponent pieces and
    ///    then reaches a piece of `player`
    pub fn is_legal(&self, player: Player, coord: Coordinate) -> bool {
        if coord.row >= BOARD_SIZE || coord.col >= BOARD_SIZE {
            return false;
        }

        if self.board.get(coord.row, coord.col) != Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_length(player, coord, dr, dc) > 0)
    }

    /// Length of the opponent run starting next to `coord` in direction
    /// (dr, dc) that is closed by a `player` piece. Zero when the run is
    /// empty, or ends on an empty cell or the board edge.
    pub(crate) fn run_length(&self, player: Player, coord: Coordinate, dr: i32, dc: i32) -> usize {
        let opponent = player.opponent().to_cell();
        let own = player.to_cell();

        let mut r = coord.row as i32 + dr;
        let mut c = coord.col as i32 + dc;
        let mut crossed = 0;

        while Board::in_bounds(r, c) {
            match self.board.get(r as usize, c as usize) {
                cell if cell == opponent => {
                    crossed += 1;
                    r += dr;
                    c += dc;
                }
                cell if cell == own => return crossed,
                _ => return 0,
            }
        }

        0
    }

    /// All legal moves for `player`, row-major (row 0..7 outer, col 0..7 inner)
    pub fn legal_moves(&self, player: Player) -> Vec<Coordinate> {
        (0..CELL_COUNT)
            .filter_map(Coordinate::from_index)
            .filter(|&coord| self.is_legal(player, coord))
            .collect()
    }

    /// Legal moves for `player` as a 64-element mask, index = row * 8 + col
    pub fn legal_move_mask(&self, player: Player) -> [bool; CELL_COUNT] {
        let mut mask = [false; CELL_COUNT];

        for (index, slot) in mask.iter_mut().enumerate() {
            if let Some(coord) = Coordinate::from_index(index) {
                *slot = self.is_legal(player, coord);
            }
        }

        mask
    }

    /// Place a `player` piece at `coord`, flip every bracketed opponent run
    /// and hand the turn to the opponent.
    /// Returns Ok(pieces_flipped), or Err(IllegalMove) with the state untouched.
    pub fn apply_move(&mut self, player: Player, coord: Coordinate) -> GameResult<u8> {
        if !self.is_legal(player, coord) {
            debug!("rejected {:?} move at {}", player, coord);
            return Err(GameError::IllegalMove {
                player,
                row: coord.row,
                col: coord.col,
            });
        }

        // Run lengths are measured before anything changes
        let runs = DIRECTIONS.map(|(dr, dc)| self.run_length(player, coord, dr, dc));

        let own = player.to_cell();
        self.board.set(coord.row, coord.col, own);

        let mut total_flipped = 0;
        for (&(dr, dc), &len) in DIRECTIONS.iter().zip(runs.iter()) {
            for step in 1..=len as i32 {
                let r = coord.row as i32 + dr * step;
                let c = coord.col as i32 + dc * step;
                self.board.set(r as usize, c as usize, own);
            }
            total_flipped += len as u8;
        }

        self.current_player = player.opponent();

        Ok(total_flipped)
    }

    pub fn has_any_move(&self, player: Player) -> bool {
        (0..CELL_COUNT)
            .filter_map(Coordinate::from_index)
            .any(|coord| self.is_legal(player, coord))
    }

    /// The game is over when neither player can move
    pub fn is_terminal(&self) -> bool {
        !self.has_any_move(Player::Dark) && !self.has_any_move(Player::Light)
    }

    /// Piece counts (dark_count, light_count)
    pub fn score(&self) -> (usize, usize) {
        (self.board.count(Cell::Dark), self.board.count(Cell::Light))
    }

    /// Get the winner of the game
    /// Returns Some(Player) if there's a winner, None if it's a draw or game is not over
    pub fn winner(&self) -> Option<Player> {
        if !self.is_terminal() {
            return None;
        }

        let (dark, light) = self.score();
        if dark > light {
            Some(Player::Dark)
        } else if light > dark {
            Some(Player::Light)
        } else {
            None
        }
    }

    /// Hand the turn to the opponent without touching the board
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "to move: {:?}", self.current_player)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Play a sequence of choices from the start; each choice picks one of
    /// the mover's legal moves, and a mover without moves passes.
    fn play_out(choices: &[usize]) -> GameState {
        let mut state = GameState::new();

        for &choice in choices {
            if state.is_terminal() {
                break;
            }
            let mover = state.current_player();
            let moves = state.legal_moves(mover);
            if moves.is_empty() {
                state.pass_turn();
                continue;
            }
            let coord = moves[choice % moves.len()];
            state.apply_move(mover, coord).unwrap();
        }

        state
    }

    fn arbitrary_game_state() -> impl Strategy<Value = GameState> {
        prop::collection::vec(0usize..64, 0..60).prop_map(|choices| play_out(&choices))
    }

    proptest! {
        /// Every reachable state accounts for all 64 cells
        #[test]
        fn prop_cell_count_conservation(state in arbitrary_game_state()) {
            let board = state.board();
            prop_assert_eq!(
                board.count(Cell::Dark) + board.count(Cell::Light) + board.count(Cell::Empty),
                64
            );
        }

        /// legal_moves, legal_move_mask and is_legal agree
        #[test]
        fn prop_move_listing_consistency(state in arbitrary_game_state()) {
            for player in [Player::Dark, Player::Light] {
                let moves = state.legal_moves(player);
                let mask = state.legal_move_mask(player);
                for index in 0..64 {
                    let coord = Coordinate::from_index(index).unwrap();
                    let legal = state.is_legal(player, coord);
                    prop_assert_eq!(mask[index], legal);
                    prop_assert_eq!(moves.contains(&coord), legal);
                }
                prop_assert!(moves.windows(2).all(|w| w[0].index() < w[1].index()));
                prop_assert_eq!(state.has_any_move(player), !moves.is_empty());
            }
        }

        /// Terminal exactly when both players have no legal move
        #[test]
        fn prop_terminal_iff_no_moves(state in arbitrary_game_state()) {
            prop_assert_eq!(
                state.is_terminal(),
                state.legal_moves(Player::Dark).is_empty()
                    && state.legal_moves(Player::Light).is_empty()
            );
        }

        /// Illegal placements leave the state identical
        #[test]
        fn prop_illegal_move_is_noop(state in arbitrary_game_state(), index in 0usize..64) {
            let coord = Coordinate::from_index(index).unwrap();
            for player in [Player::Dark, Player::Light] {
                if !state.is_legal(player, coord) {
                    let mut after = state;
                    prop_assert!(after.apply_move(player, coord).is_err());
                    prop_assert_eq!(after, state);
                }
            }
        }

        /// A legal move flips all and only the bracketed opponent runs
        #[test]
        fn prop_piece_flipping_correctness(state in arbitrary_game_state(), index in 0usize..64) {
            let coord = Coordinate::from_index(index).unwrap();
            let player = state.current_player();
            if !state.is_legal(player, coord) {
                return Ok(());
            }

            let own = player.to_cell();
            let opponent = player.opponent().to_cell();
            let original = *state.board();

            // Independently compute the expected flips
            let mut expected = original;
            expected.set(coord.row, coord.col, own);
            for (dr, dc) in DIRECTIONS {
                let mut run = Vec::new();
                let mut r = coord.row as i32 + dr;
                let mut c = coord.col as i32 + dc;
                while Board::in_bounds(r, c) && original.get(r as usize, c as usize) == opponent {
                    run.push((r as usize, c as usize));
                    r += dr;
                    c += dc;
                }
                if Board::in_bounds(r, c) && original.get(r as usize, c as usize) == own {
                    for (fr, fc) in run {
                        expected.set(fr, fc, own);
                    }
                }
            }

            let mut after = state;
            let flipped = after.apply_move(player, coord).unwrap();

            prop_assert_eq!(*after.board(), expected);
            prop_assert!(flipped >= 1);
            prop_assert_eq!(
                after.board().count(own),
                original.count(own) + 1 + flipped as usize
            );
            prop_assert_eq!(
                after.board().count(opponent),
                original.count(opponent) - flipped as usize
            );
            prop_assert_eq!(after.current_player(), player.opponent());
        }
    }
}
