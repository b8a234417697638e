use rand::rngs::SmallRng;

use crate::{ai, board::Board};

/// Something that picks where to shoot next.
pub trait Player {
    /// Choose the next target on the opponent's board. Only the shot marks of
    /// `target` may be consulted, never its ship layout. Returns `None` when
    /// no target is available.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<(usize, usize)>;
}

/// Random-shot opponent, also used as an autopilot for the player side.
#[derive(Debug, Default)]
pub struct ComputerPlayer;

impl ComputerPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for ComputerPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<(usize, usize)> {
        ai::choose_shot(target, rng)
    }
}
