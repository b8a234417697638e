#![cfg(feature = "std")]

//! Text rendering of boards for terminal front ends.

use std::fmt::Write;
use std::string::String;

use crate::{board::Board, common::CellState, config::BOARD_SIZE, ship::Fleet};

const N: usize = BOARD_SIZE as usize;

/// Glyph shown for (row, col). Ships are only drawn when `reveal` is set;
/// hits on a sunk ship are always drawn as sunk.
pub fn cell_glyph(board: &Board, fleet: &Fleet, row: usize, col: usize, reveal: bool) -> char {
    match board.cell_state(row, col) {
        CellState::Empty => '~',
        CellState::ShipOccupied if reveal => 'S',
        CellState::ShipOccupied => '~',
        CellState::Miss => 'o',
        CellState::Hit => match fleet.ship_at(row, col) {
            Some(ship) if ship.is_sunk() => '#',
            _ => 'X',
        },
    }
}

/// Render a board with column letters and 1-based row numbers.
pub fn render_board(board: &Board, fleet: &Fleet, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..N {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..N {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..N {
            out.push(' ');
            out.push(cell_glyph(board, fleet, r, c, reveal));
        }
        out.push('\n');
    }
    out
}

/// Legend for [`render_board`] output.
pub fn legend(reveal: bool) -> &'static str {
    if reveal {
        "Legend: S=Ship  X=Hit  #=Sunk  o=Miss  ~=Water"
    } else {
        "Legend: X=Hit  #=Sunk  o=Miss  ~=Unknown"
    }
}
