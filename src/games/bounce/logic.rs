//! Bouncing-ball logic: input, per-tick kinematics, resizing.

use super::types::*;
use crate::games::{press_quit, GameEvent};

/// UI-agnostic input actions for the bounce demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceInput {
    Left,
    Right,
    TogglePause, // Space / P
    Quit,        // Esc
    Other,
}

/// Process player input.
pub fn process_input(game: &mut BounceGame, input: BounceInput) {
    if game.outcome.is_some() {
        return;
    }

    if input == BounceInput::Quit {
        press_quit(&mut game.quit_pending, &mut game.outcome);
        return;
    }

    if game.quit_pending {
        // Any non-Esc key cancels the quit prompt
        game.quit_pending = false;
        return;
    }

    match input {
        BounceInput::Left => game.heading = Heading::Left,
        BounceInput::Right => game.heading = Heading::Right,
        BounceInput::TogglePause => game.paused = !game.paused,
        BounceInput::Quit | BounceInput::Other => {}
    }
}

/// Advance the ball by one tick.
pub fn step_bounce(game: &mut BounceGame) {
    if game.outcome.is_some() || game.paused || game.quit_pending {
        return;
    }

    let r = game.radius;

    game.x += game.vx * game.heading.sign();
    match game.heading {
        Heading::Right if game.x > game.width - r => {
            game.x = game.width - r;
            game.heading = Heading::Left;
            game.wall_hits += 1;
            game.events.push(GameEvent::WallHit);
        }
        Heading::Left if game.x < r => {
            game.x = r;
            game.heading = Heading::Right;
            game.wall_hits += 1;
            game.events.push(GameEvent::WallHit);
        }
        _ => {}
    }

    game.y += game.vy;
    if game.y > game.height - r {
        game.y = game.height - r;
        game.vy = -game.vy;
        game.floor_bounces += 1;
        game.events.push(GameEvent::FloorBounce);
    }
    game.vy += GRAVITY;

    game.tick_count += 1;
}

/// Follow a new world size. The ball is pulled back inside on the next tick.
pub fn resize(game: &mut BounceGame, width: i32, height: i32) {
    if width == game.width && height == game.height {
        return;
    }
    tracing::debug!(width, height, "bounce world resized");
    game.width = width.max(1);
    game.height = height.max(1);
}
