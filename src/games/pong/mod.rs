//! Pong: paddle-ball against a computer opponent.
//!
//! The ball travels in straight lines, reflecting off the top and bottom
//! walls and off paddles. Missing the ball gives the other side a point.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
