//! Random ship placement honouring the no-touching rule.
//!
//! A ship may only be placed where every cell it covers, together with the
//! cell's Moore neighbourhood (clipped at the board edge), is currently
//! [`CellState::Empty`]. Ships therefore never touch, not even diagonally.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::board::Board;
use crate::common::CellState;
use crate::config::BOARD_SIZE;
use crate::ship::{Fleet, Orientation, Ship, ShipError};

const N: usize = BOARD_SIZE as usize;

/// A legal origin and orientation for a ship of some size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCandidate {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// No legal position is left for a ship of this size.
    #[error("no legal position left for a ship of size {size}")]
    Exhausted { size: usize },
    /// The requested position touches or overlaps another ship.
    #[error("ship of size {size} at ({row}, {col}) touches another ship")]
    Blocked { row: usize, col: usize, size: usize },
    #[error(transparent)]
    Ship(#[from] ShipError),
}

/// `true` if (row, col) and all of its neighbours are empty.
pub fn cell_is_vacant(board: &Board, row: usize, col: usize) -> bool {
    (row.saturating_sub(1)..=(row + 1).min(N - 1)).all(|r| {
        (col.saturating_sub(1)..=(col + 1).min(N - 1))
            .all(|c| board.cell_state(r, c) == CellState::Empty)
    })
}

fn span_is_vacant(board: &Board, ship: &Ship) -> bool {
    ship.cells().all(|(r, c)| cell_is_vacant(board, r, c))
}

/// Every legal placement for a ship of `size` on the current board.
///
/// A size-1 ship covers the same cell in both orientations, so it is only
/// listed once, as [`Orientation::Horizontal`].
pub fn valid_positions(size: usize, board: &Board) -> Vec<PlacementCandidate> {
    let mut positions = Vec::new();
    if size == 0 || size > N {
        return positions;
    }
    let orientations: &[Orientation] = if size == 1 {
        &[Orientation::Horizontal]
    } else {
        &[Orientation::Horizontal, Orientation::Vertical]
    };
    for &orientation in orientations {
        let (dr, dc) = orientation.step();
        let max_row = N - dr * (size - 1);
        let max_col = N - dc * (size - 1);
        for row in 0..max_row {
            for col in 0..max_col {
                let Ok(ship) = Ship::new(row, col, size, orientation) else {
                    continue;
                };
                if span_is_vacant(board, &ship) {
                    positions.push(PlacementCandidate {
                        row,
                        col,
                        orientation,
                    });
                }
            }
        }
    }
    positions
}

fn commit(board: &mut Board, fleet: &mut Fleet, ship: Ship) {
    for (r, c) in ship.cells() {
        board.set_cell_state(r, c, CellState::ShipOccupied);
    }
    debug!(
        "placed ship of size {} at {:?} ({:?})",
        ship.size(),
        ship.origin(),
        ship.orientation()
    );
    fleet.push(ship);
}

/// Place a ship of `size` at a position drawn uniformly from
/// [`valid_positions`].
pub fn place_random<R: Rng + ?Sized>(
    size: usize,
    board: &mut Board,
    fleet: &mut Fleet,
    rng: &mut R,
) -> Result<PlacementCandidate, PlacementError> {
    let positions = valid_positions(size, board);
    if positions.is_empty() {
        return Err(PlacementError::Exhausted { size });
    }
    let pick = positions[rng.random_range(0..positions.len())];
    let ship = Ship::new(pick.row, pick.col, size, pick.orientation)?;
    commit(board, fleet, ship);
    Ok(pick)
}

/// Place a ship of `size` at a chosen position, enforcing the same rules as
/// random placement.
pub fn place_ship(
    size: usize,
    at: PlacementCandidate,
    board: &mut Board,
    fleet: &mut Fleet,
) -> Result<(), PlacementError> {
    let ship = Ship::new(at.row, at.col, size, at.orientation)?;
    if !span_is_vacant(board, &ship) {
        return Err(PlacementError::Blocked {
            row: at.row,
            col: at.col,
            size,
        });
    }
    commit(board, fleet, ship);
    Ok(())
}

/// Place one ship per entry of `sizes`, in order, onto `board` and `fleet`.
/// Later ships see the occupancy left by earlier ones.
pub fn setup_fleet<R: Rng + ?Sized>(
    sizes: &[usize],
    board: &mut Board,
    fleet: &mut Fleet,
    rng: &mut R,
) -> Result<(), PlacementError> {
    for &size in sizes {
        place_random(size, board, fleet, rng)?;
    }
    Ok(())
}
