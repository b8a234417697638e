use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::{
    ai,
    board::Board,
    common::{CellState, ShotError, ShotOutcome, Side},
    config::{ConfigError, GameConfig},
    placement::{setup_fleet, PlacementError},
    ship::Fleet,
};

/// Resolve a shot at (row, col) against one side's board and fleet.
///
/// A miss marks the cell [`CellState::Miss`]. A hit marks it
/// [`CellState::Hit`] and adds one hit to the ship covering it. Errors leave
/// the board and fleet untouched.
pub fn resolve_shot(
    row: usize,
    col: usize,
    board: &mut Board,
    fleet: &mut Fleet,
) -> Result<ShotOutcome, ShotError> {
    if !Board::in_bounds(row, col) {
        return Err(ShotError::OutOfBounds { row, col });
    }
    match board.cell_state(row, col) {
        CellState::Hit | CellState::Miss => Err(ShotError::AlreadyResolved { row, col }),
        CellState::ShipOccupied => {
            let ship = fleet
                .ship_at_mut(row, col)
                .ok_or(ShotError::UnknownShip { row, col })?;
            let sunk = ship.register_hit();
            board.set_cell_state(row, col, CellState::Hit);
            if sunk {
                debug!("shot at ({row}, {col}) sank {:?}", ship);
                Ok(ShotOutcome::Sunk)
            } else {
                Ok(ShotOutcome::Hit)
            }
        }
        CellState::Empty => {
            board.set_cell_state(row, col, CellState::Miss);
            Ok(ShotOutcome::Miss)
        }
    }
}

/// `true` when every ship in `fleet` is sunk.
pub fn is_fleet_destroyed(fleet: &Fleet) -> bool {
    fleet.is_destroyed()
}

/// Errors surfaced by a [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("fleet setup failed: {0}")]
    Placement(#[from] PlacementError),
    #[error("illegal shot: {0}")]
    Shot(#[from] ShotError),
    #[error("the game is already over")]
    GameOver,
}

/// Current status of a game, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Board and fleet owned by one side.
#[derive(Debug, Clone, Default)]
pub struct SideState {
    pub board: Board,
    pub fleet: Fleet,
    /// Shots this side has fired.
    pub shots_fired: usize,
}

impl SideState {
    fn setup<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Self, PlacementError> {
        let mut state = SideState::default();
        setup_fleet(sizes, &mut state.board, &mut state.fleet, rng)?;
        Ok(state)
    }
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub shooter: Side,
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
}

/// Everything that happened during one call to [`GameSession::play_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player_shot: ShotReport,
    /// Absent when the player's shot ended the game.
    pub computer_shot: Option<ShotReport>,
    pub status: GameStatus,
}

impl TurnReport {
    /// Side whose fleet was destroyed this turn, if any.
    pub fn loser(&self) -> Option<Side> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(Side::Computer),
            GameStatus::Lost => Some(Side::Player),
        }
    }

    /// Human-readable messages, one per shot plus the game-over line.
    pub fn messages(&self) -> Vec<String> {
        let mut out = Vec::new();
        out.push(self.player_shot.outcome.to_string());
        if let Some(shot) = self.computer_shot {
            out.push(shot.outcome.to_string());
        }
        if let Some(side) = self.loser() {
            out.push(alloc::format!("{side} has lost"));
        }
        out
    }
}

/// A single-player game: the player against the computer.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    player: SideState,
    computer: SideState,
    status: GameStatus,
    turns: usize,
}

impl GameSession {
    /// Set up both fleets, player first.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let player = SideState::setup(&config.ship_sizes, rng)?;
        let computer = SideState::setup(&config.ship_sizes, rng)?;
        info!(
            "new game with {} ships per side: {:?}",
            config.ship_sizes.len(),
            config.ship_sizes
        );
        Ok(Self {
            config,
            player,
            computer,
            status: GameStatus::InProgress,
            turns: 0,
        })
    }

    /// Discard both boards and run fleet setup again.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        *self = Self::new(self.config.clone(), rng)?;
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Completed turns.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Fire at `target`'s board on behalf of its opponent.
    fn fire(&mut self, target: Side, row: usize, col: usize) -> Result<ShotReport, ShotError> {
        let state = self.side_mut(target);
        let outcome = resolve_shot(row, col, &mut state.board, &mut state.fleet)?;
        let shooter = target.opponent();
        self.side_mut(shooter).shots_fired += 1;
        debug!("{shooter} fired at ({row}, {col}): {outcome}");
        Ok(ShotReport {
            shooter,
            row,
            col,
            outcome,
        })
    }

    /// Play one full turn: the player's shot at (row, col), then, unless that
    /// ended the game, one computer shot.
    pub fn play_turn<R: Rng + ?Sized>(
        &mut self,
        row: usize,
        col: usize,
        rng: &mut R,
    ) -> Result<TurnReport, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let player_shot = self.fire(Side::Computer, row, col)?;
        self.turns += 1;
        if is_fleet_destroyed(&self.computer.fleet) {
            self.status = GameStatus::Won;
            info!("computer fleet destroyed after {} turns", self.turns);
            return Ok(TurnReport {
                player_shot,
                computer_shot: None,
                status: self.status,
            });
        }

        // the player's board can only be full if the player fleet is gone
        let computer_shot = match ai::choose_shot(&self.player.board, rng) {
            Some((r, c)) => Some(self.fire(Side::Player, r, c)?),
            None => None,
        };
        if is_fleet_destroyed(&self.player.fleet) {
            self.status = GameStatus::Lost;
            info!("player fleet destroyed after {} turns", self.turns);
        }
        Ok(TurnReport {
            player_shot,
            computer_shot,
            status: self.status,
        })
    }
}
