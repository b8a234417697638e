#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::*;
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
