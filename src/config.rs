//! Board dimensions, the default fleet and per-game configuration.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

pub const BOARD_SIZE: u8 = 10;
pub const MAX_SHIP_SIZE: usize = 5;
pub const DEFAULT_SHIP_SIZES: [usize; 6] = [1, 2, 2, 3, 4, 5];

/// Total number of ship cells in the default fleet.
pub const TOTAL_SHIP_CELLS: usize = 1 + 2 + 2 + 3 + 4 + 5;

/// Errors found while validating a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("fleet must contain at least one ship")]
    EmptyFleet,
    #[error("ship size {0} must be between 1 and 5")]
    BadSize(usize),
}

/// Settings shared by both sides of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Ship sizes, placed in this order.
    pub ship_sizes: Vec<usize>,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ship_sizes: DEFAULT_SHIP_SIZES.to_vec(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ship_sizes.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(&bad) = self
            .ship_sizes
            .iter()
            .find(|&&s| s == 0 || s > MAX_SHIP_SIZE)
        {
            return Err(ConfigError::BadSize(bad));
        }
        Ok(())
    }

    /// Seeded RNG when a seed is configured, otherwise one drawn from entropy.
    #[cfg(feature = "std")]
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }

    /// Seeded RNG; without `std` there is no entropy source, so an unset seed
    /// falls back to zero.
    #[cfg(not(feature = "std"))]
    pub fn rng(&self) -> SmallRng {
        SmallRng::seed_from_u64(self.seed.unwrap_or(0))
    }
}
