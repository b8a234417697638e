//! Common types: cell states, shot outcomes, sides and shot errors.

use core::fmt;
use thiserror::Error;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    ShipOccupied,
    Hit,
    Miss,
}

impl CellState {
    /// `true` once a shot has landed on the cell.
    pub fn is_played(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Miss,
    /// Hit a ship that still has undamaged cells.
    Hit,
    /// Hit the last undamaged cell of a ship.
    Sunk,
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ShotOutcome::Miss => "Miss",
            ShotOutcome::Hit => "Hit",
            ShotOutcome::Sunk => "Sunk",
        };
        f.write_str(msg)
    }
}

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Computer => f.write_str("Computer"),
        }
    }
}

/// Errors returned when a shot breaks the caller contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShotError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) was already played")]
    AlreadyResolved { row: usize, col: usize },
    /// The board marks a ship at the cell but no fleet record covers it.
    #[error("no ship in the fleet occupies ({row}, {col})")]
    UnknownShip { row: usize, col: usize },
}
