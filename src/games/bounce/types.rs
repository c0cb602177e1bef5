//! Bouncing-ball data structures.
//!
//! All positions are integer world pixels. One terminal column is
//! `PIXELS_PER_COL` pixels wide and one row is `PIXELS_PER_ROW` tall, which
//! keeps the ball round on screen.

use crate::games::{GameEvent, Outcome};

/// Downward acceleration added to `vy` every tick.
pub const GRAVITY: i32 = 5;

/// World size used before the first resize.
pub const DEFAULT_WIDTH: i32 = 640;
pub const DEFAULT_HEIGHT: i32 = 480;

/// Horizontal travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    pub fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BounceGame {
    pub outcome: Option<Outcome>,
    pub quit_pending: bool,
    pub paused: bool,

    // Ball
    pub radius: i32,
    pub x: i32,
    pub y: i32,
    /// Horizontal speed; the sign comes from `heading`.
    pub vx: i32,
    /// Vertical velocity, positive = downward.
    pub vy: i32,
    pub heading: Heading,

    // World
    pub width: i32,
    pub height: i32,

    // Counters
    pub wall_hits: u32,
    pub floor_bounces: u32,
    pub tick_count: u64,

    pub events: Vec<GameEvent>,
}

impl BounceGame {
    /// The ball starts just off the left edge, touching the ceiling, heading right.
    pub fn new(radius: i32, width: i32, height: i32) -> Self {
        let radius = radius.max(1);
        Self {
            outcome: None,
            quit_pending: false,
            paused: false,

            radius,
            x: -radius,
            y: radius,
            vx: radius / 10,
            vy: 0,
            heading: Heading::Right,

            width,
            height,

            wall_hits: 0,
            floor_bounces: 0,
            tick_count: 0,

            events: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = BounceGame::new(100, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        assert_eq!(game.x, -100);
        assert_eq!(game.y, 100);
        assert_eq!(game.vx, 10);
        assert_eq!(game.vy, 0);
        assert_eq!(game.heading, Heading::Right);
        assert!(!game.paused);
        assert!(game.outcome.is_none());
    }

    #[test]
    fn test_small_radius_speed_truncates() {
        let game = BounceGame::new(25, 100, 100);
        assert_eq!(game.vx, 2);
        let tiny = BounceGame::new(0, 100, 100);
        assert_eq!(tiny.radius, 1);
    }

    #[test]
    fn test_heading_sign() {
        assert_eq!(Heading::Left.sign(), -1);
        assert_eq!(Heading::Right.sign(), 1);
    }
}
