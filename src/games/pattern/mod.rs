//! "Match the pattern" tile games.
//!
//! The player edits a 3x3 board of coloured tiles until it equals the
//! level's target. Three variants differ only in what pressing a tile does:
//! Cycle steps one tile's colour, Flip steps a tile and its neighbours, and
//! Paint sets a tile to the chosen brush colour.

pub mod levels;
pub mod logic;
pub mod types;

pub use levels::{levels_for, Level, LEVELS};
pub use logic::*;
pub use types::*;
