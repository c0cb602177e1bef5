//! Pong data structures.

use crate::games::{GameEvent, Outcome};
use serde::{Deserialize, Serialize};

/// Difficulty levels for Pong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(PongDifficulty);

/// Field dimensions in cells.
pub const FIELD_WIDTH: f64 = 60.0;
pub const FIELD_HEIGHT: f64 = 20.0;

/// Paddle columns. The player defends the left edge.
pub const PLAYER_X: f64 = 1.0;
pub const CPU_X: f64 = FIELD_WIDTH - 2.0;

/// Ticks between a point (or the start) and the serve (~1s at 30 Hz).
pub const SERVE_DELAY_TICKS: u32 = 30;

/// Rows the player paddle moves per key press.
pub const PADDLE_STEP: f64 = 1.0;

/// Horizontal speed multiplier applied on every paddle hit.
pub const SPEEDUP_PER_HIT: f64 = 1.05;
/// Cap on horizontal speed, as a multiple of the serve speed.
pub const MAX_SPEED_FACTOR: f64 = 2.0;
/// Vertical speed at the very edge of a paddle, relative to horizontal speed.
pub const MAX_SPIN: f64 = 0.75;

impl PongDifficulty {
    /// Max rows per tick the CPU paddle can travel.
    pub fn cpu_speed(&self) -> f64 {
        match self {
            Self::Novice => 0.25,
            Self::Apprentice => 0.35,
            Self::Journeyman => 0.45,
            Self::Master => 0.6,
        }
    }

    /// Horizontal ball speed at serve, cells per tick.
    pub fn ball_speed(&self) -> f64 {
        match self {
            Self::Novice => 0.5,
            Self::Apprentice => 0.6,
            Self::Journeyman => 0.7,
            Self::Master => 0.8,
        }
    }

    /// Paddle height in rows (both sides).
    pub fn paddle_height(&self) -> f64 {
        match self {
            Self::Novice => 5.0,
            Self::Apprentice => 5.0,
            Self::Journeyman => 4.0,
            Self::Master => 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Top row (float for smooth CPU movement).
    pub top: f64,
    pub height: f64,
}

impl Paddle {
    pub fn centered(height: f64) -> Self {
        Self {
            top: (FIELD_HEIGHT - height) / 2.0,
            height,
        }
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Whether a ball at row `y` meets this paddle.
    pub fn covers(&self, y: f64) -> bool {
        y >= self.top - 0.5 && y <= self.top + self.height - 0.5
    }

    /// Move by `dy`, staying inside the field.
    pub fn shift(&mut self, dy: f64) {
        self.top = (self.top + dy).clamp(0.0, FIELD_HEIGHT - self.height);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Ball {
    pub fn centered() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0,
            y: FIELD_HEIGHT / 2.0,
            vx: 0.0,
            vy: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PongGame {
    pub difficulty: PongDifficulty,
    pub outcome: Option<Outcome>,
    pub quit_pending: bool,
    /// True until the player presses Space.
    pub waiting_to_start: bool,

    pub player: Paddle,
    pub cpu: Paddle,
    pub ball: Ball,

    pub player_score: u32,
    pub cpu_score: u32,
    pub target_score: u32,

    /// Ticks left before the ball is served.
    pub serve_timer: u32,
    /// Serve direction for the pending serve.
    pub serve_to_player: bool,
    /// Paddle hits in the current rally.
    pub rally: u32,
    pub longest_rally: u32,
    pub tick_count: u64,

    pub events: Vec<GameEvent>,
}

impl PongGame {
    pub fn new(difficulty: PongDifficulty, target_score: u32) -> Self {
        let paddle_height = difficulty.paddle_height();
        Self {
            difficulty,
            outcome: None,
            quit_pending: false,
            waiting_to_start: true,

            player: Paddle::centered(paddle_height),
            cpu: Paddle::centered(paddle_height),
            ball: Ball::centered(),

            player_score: 0,
            cpu_score: 0,
            target_score: target_score.max(1),

            serve_timer: SERVE_DELAY_TICKS,
            serve_to_player: true,
            rally: 0,
            longest_rally: 0,
            tick_count: 0,

            events: Vec::new(),
        }
    }

    /// Ball is in play (not waiting for a serve).
    pub fn ball_live(&self) -> bool {
        self.serve_timer == 0
    }
}
