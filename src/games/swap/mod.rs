//! Tile-swap puzzle.
//!
//! Nine distinct tiles start shuffled; the player swaps pairs until the
//! board is back in order. Skins only change how tiles are drawn.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
