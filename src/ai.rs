// Computer opponent: memoryless random shots over unplayed cells.

use log::trace;
use rand::Rng;

use crate::board::Board;
use crate::config::BOARD_SIZE;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Pick a uniformly random cell that has not been shot at yet.
///
/// Draws coordinates until one lands on an unplayed cell. The only memory is
/// the board itself. Returns `None` once every cell has been played.
pub fn choose_shot<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    if board.unplayed_count() == 0 {
        return None;
    }
    let mut draws = 0usize;
    loop {
        draws += 1;
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        if !board.is_played(row, col) {
            trace!("computer picked ({row}, {col}) after {draws} draws");
            return Some((row, col));
        }
    }
}
