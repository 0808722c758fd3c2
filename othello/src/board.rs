//! Grid primitives: cells, players, coordinates and the 8x8 board.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Side length of the board
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell(&self) -> Cell {
        match self {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Player::Dark),
            Cell::Light => Some(Player::Light),
        }
    }

    /// Flat encoding used by [`Board::to_flat`]: 0 = Empty, 1 = Dark, 2 = Light
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Dark => 1,
            Cell::Light => 2,
        }
    }
}

/// A (row, col) position, both in `0..8`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// Row-major index: `row * 8 + col`
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Inverse of [`Coordinate::index`]; `None` past the last cell
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Coordinate::new(index / BOARD_SIZE, index % BOARD_SIZE))
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board with every cell empty
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard opening position:
    /// - (3,3) and (4,4) are Light
    /// - (3,4) and (4,3) are Dark
    pub fn initial() -> Self {
        let mut board = Board::empty();
        board.cells[3][3] = Cell::Light;
        board.cells[3][4] = Cell::Dark;
        board.cells[4][3] = Cell::Dark;
        board.cells[4][4] = Cell::Light;
        board
    }

    pub fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    /// Cell at (row, col). Panics when either index is outside `0..8`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Board as a flat array [0=empty, 1=dark, 2=light]
    /// Array is indexed as: index = row * 8 + col
    pub fn to_flat(&self) -> [u8; CELL_COUNT] {
        let mut state = [0u8; CELL_COUNT];

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                state[row * BOARD_SIZE + col] = self.cells[row][col].code();
            }
        }

        state
    }

    /// Decode a flat array produced by [`Board::to_flat`]
    pub fn from_flat(state: &[u8; CELL_COUNT]) -> GameResult<Self> {
        let mut board = Board::empty();

        for (index, &value) in state.iter().enumerate() {
            let cell = match value {
                0 => Cell::Empty,
                1 => Cell::Dark,
                2 => Cell::Light,
                _ => return Err(GameError::InvalidCellCode { index, value }),
            };
            board.cells[index / BOARD_SIZE][index % BOARD_SIZE] = cell;
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Dark => "●",
                    Cell::Light => "○",
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
