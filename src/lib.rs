//! Arcade - small terminal games.
//!
//! A bouncing-ball demo, three "match the pattern" tile games, a tile-swap
//! puzzle and Pong, sharing one menu, one fixed-rate loop and one config.

pub mod app;
pub mod cli;
pub mod core;
pub mod games;
pub mod input;
pub mod sound;
pub mod utils;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
