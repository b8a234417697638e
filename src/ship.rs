//! Ship records and the per-side fleet.

use alloc::vec::Vec;
use core::fmt;
use thiserror::Error;

use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Row/column step taken from one ship cell to the next.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShipError {
    #[error("ship size must be at least 1")]
    InvalidSize,
    #[error("ship of size {size} at ({row}, {col}) leaves the board")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// A ship placed on the board: origin, span and damage taken.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    row: usize,
    col: usize,
    size: usize,
    orientation: Orientation,
    hits: usize,
}

impl Ship {
    /// Place a ship of `size` at (`row`, `col`) along `orientation`.
    pub fn new(
        row: usize,
        col: usize,
        size: usize,
        orientation: Orientation,
    ) -> Result<Self, ShipError> {
        if size == 0 {
            return Err(ShipError::InvalidSize);
        }
        let n = BOARD_SIZE as usize;
        let out_of_bounds = ShipError::OutOfBounds { row, col, size };
        if row >= n || col >= n || size > n {
            return Err(out_of_bounds);
        }
        let (dr, dc) = orientation.step();
        let end_row = row.checked_add(dr * (size - 1)).ok_or(out_of_bounds)?;
        let end_col = col.checked_add(dc * (size - 1)).ok_or(out_of_bounds)?;
        if end_row >= n || end_col >= n {
            return Err(out_of_bounds);
        }
        Ok(Ship {
            row,
            col,
            size,
            orientation,
            hits: 0,
        })
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Undamaged cells left.
    pub fn remaining(&self) -> usize {
        self.size - self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.hits == self.size
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = self.orientation.step();
        (0..self.size).map(move |i| (self.row + dr * i, self.col + dc * i))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                row == self.row && col >= self.col && col < self.col + self.size
            }
            Orientation::Vertical => {
                col == self.col && row >= self.row && row < self.row + self.size
            }
        }
    }

    /// Count one more hit. Saturates at `size`; returns `true` if the ship is
    /// now sunk.
    pub fn register_hit(&mut self) -> bool {
        if self.hits < self.size {
            self.hits += 1;
        }
        self.is_sunk()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), size: {}, orientation: {:?}, hits: {} }}",
            self.row, self.col, self.size, self.orientation, self.hits,
        )
    }
}

/// Ordered collection of one side's ships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    pub fn push(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ship sizes in placement order.
    pub fn sizes(&self) -> Vec<usize> {
        self.ships.iter().map(Ship::size).collect()
    }

    /// The ship covering (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(row, col))
    }

    pub fn ship_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.contains(row, col))
    }

    /// Ships not yet sunk.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// `true` when every ship is sunk.
    pub fn is_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn clear(&mut self) {
        self.ships.clear();
    }
}
