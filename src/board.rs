//! Board model: per-cell state for one side's 10×10 grid.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::CellState;
use crate::config::BOARD_SIZE;

pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const N: usize = BOARD_SIZE as usize;

/// One side's grid. Ship occupancy and shot marks are kept in separate
/// masks; a hit cell keeps its ship bit.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// An all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < N && col < N
    }

    fn assert_in_bounds(row: usize, col: usize) {
        assert!(
            Self::in_bounds(row, col),
            "cell ({row}, {col}) is outside the {N}x{N} board"
        );
    }

    /// State of (row, col).
    ///
    /// # Panics
    /// If the cell is outside the board.
    pub fn cell_state(&self, row: usize, col: usize) -> CellState {
        Self::assert_in_bounds(row, col);
        if self.hits.get(row, col) == Ok(true) {
            CellState::Hit
        } else if self.misses.get(row, col) == Ok(true) {
            CellState::Miss
        } else if self.ship_map.get(row, col) == Ok(true) {
            CellState::ShipOccupied
        } else {
            CellState::Empty
        }
    }

    /// Overwrite the state of (row, col).
    ///
    /// # Panics
    /// If the cell is outside the board.
    pub fn set_cell_state(&mut self, row: usize, col: usize, state: CellState) {
        Self::assert_in_bounds(row, col);
        let (ship, hit, miss) = match state {
            CellState::Empty => (false, false, false),
            CellState::ShipOccupied => (true, false, false),
            // a hit cell keeps its ship bit
            CellState::Hit => (self.ship_map.get(row, col) == Ok(true), true, false),
            CellState::Miss => (self.ship_map.get(row, col) == Ok(true), false, true),
        };
        self.ship_map.assign(row, col, ship);
        self.hits.assign(row, col, hit);
        self.misses.assign(row, col, miss);
    }

    /// `true` if a shot already landed on (row, col).
    pub fn is_played(&self, row: usize, col: usize) -> bool {
        self.cell_state(row, col).is_played()
    }

    /// Cells holding a ship, hit or not.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Cells no shot has landed on yet.
    pub fn unplayed_count(&self) -> usize {
        (!(self.hits | self.misses)).count_ones()
    }

    /// Cells holding a ship, hit or not, row by row.
    pub fn ship_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        self.ship_map.iter_set_bits()
    }

    /// All cells in row-major order.
    pub fn coords() -> impl Iterator<Item = (usize, usize)> {
        (0..N).flat_map(|r| (0..N).map(move |c| (r, c)))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for r in 0..N {
            write!(f, "  ")?;
            for c in 0..N {
                let ch = match self.cell_state(r, c) {
                    CellState::Empty => '.',
                    CellState::ShipOccupied => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
