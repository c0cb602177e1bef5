//! Core pieces shared by every game: timing, grids, configuration.

pub mod config;
pub mod constants;
pub mod frame_clock;
pub mod grid;

pub use config::Config;
pub use constants::*;
pub use frame_clock::FrameClock;
pub use grid::{grids_match, Cell, Grid, MoveDirection, GRID_SIZE};
