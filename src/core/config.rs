//! User configuration loaded from `~/.arcade/config.json`.
//!
//! Every field is optional in the file. A missing or malformed file falls
//! back to defaults, and command-line flags override what the file says.

use super::constants::{CONFIG_FILE_NAME, DEFAULT_TICK_RATE_HZ, MAX_TICK_RATE_HZ, MIN_TICK_RATE_HZ};
use crate::games::pong::PongDifficulty;
use crate::games::swap::Skin;
use crate::utils::persistence::{arcade_path, load_json_or_default};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BOUNCE_RADIUS: i32 = 100;
pub const DEFAULT_PONG_TARGET_SCORE: u32 = 7;
const MAX_PONG_TARGET_SCORE: u32 = 99;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulation and redraw rate.
    pub tick_rate_hz: u32,
    /// Play sound effects when an output is available.
    pub sound: bool,
    /// Capture mouse clicks for the tile games.
    pub mouse: bool,
    /// Skin the swap puzzle starts with.
    pub swap_skin: Skin,
    /// Pong difficulty preselected in the menu.
    pub pong_difficulty: PongDifficulty,
    /// Points needed to win a Pong match.
    pub pong_target_score: u32,
    /// Ball radius in world pixels for the bounce demo.
    pub bounce_radius: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            sound: true,
            mouse: true,
            swap_skin: Skin::Classic,
            pong_difficulty: PongDifficulty::Novice,
            pong_target_score: DEFAULT_PONG_TARGET_SCORE,
            bounce_radius: DEFAULT_BOUNCE_RADIUS,
        }
    }
}

impl Config {
    /// Load `~/.arcade/config.json`, or defaults if it can't be read.
    pub fn load() -> Self {
        match arcade_path(CONFIG_FILE_NAME) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "no config directory, using defaults");
                Self::default()
            }
        }
    }

    /// Load from an explicit path, sanitizing the result.
    pub fn load_from(path: &Path) -> Self {
        let config: Config = load_json_or_default(path);
        config.sanitized()
    }

    /// Clamp values that would break a game into their valid ranges.
    pub fn sanitized(mut self) -> Self {
        self.tick_rate_hz = self.tick_rate_hz.clamp(MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ);
        self.pong_target_score = self.pong_target_score.clamp(1, MAX_PONG_TARGET_SCORE);
        if self.bounce_radius <= 0 {
            self.bounce_radius = DEFAULT_BOUNCE_RADIUS;
        }
        self
    }
}
