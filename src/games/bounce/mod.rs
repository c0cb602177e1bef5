//! Bouncing-ball demo.
//!
//! A ball rolls back and forth between the side walls while gravity pulls it
//! onto the floor, where it bounces with no energy loss.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
