//! Pong logic: paddles, ball reflection, scoring, serving.

use super::types::*;
use crate::games::{press_quit, GameEvent, Outcome};
use rand::Rng;

/// UI-agnostic input actions for Pong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongInput {
    Up,
    Down,
    Start, // Space
    Quit,  // Esc
    Other,
}

/// Process player input.
pub fn process_input(game: &mut PongGame, input: PongInput) {
    if game.outcome.is_some() {
        return;
    }

    if input == PongInput::Quit {
        press_quit(&mut game.quit_pending, &mut game.outcome);
        return;
    }

    if game.quit_pending {
        game.quit_pending = false;
        return;
    }

    if game.waiting_to_start {
        if input == PongInput::Start {
            game.waiting_to_start = false;
        }
        return;
    }

    match input {
        PongInput::Up => game.player.shift(-PADDLE_STEP),
        PongInput::Down => game.player.shift(PADDLE_STEP),
        PongInput::Start | PongInput::Quit | PongInput::Other => {}
    }
}

/// Advance the match by one tick.
pub fn step_pong<R: Rng>(game: &mut PongGame, rng: &mut R) {
    if game.outcome.is_some() || game.waiting_to_start || game.quit_pending {
        return;
    }

    game.tick_count += 1;
    move_cpu(game);

    if game.serve_timer > 0 {
        game.serve_timer -= 1;
        if game.serve_timer == 0 {
            serve(game, rng);
        }
        return;
    }

    let prev_x = game.ball.x;
    game.ball.x += game.ball.vx;
    game.ball.y += game.ball.vy;

    reflect_off_walls(game);
    check_paddles(game, prev_x);

    if game.ball.x < 0.0 {
        award_point(game, false);
    } else if game.ball.x > FIELD_WIDTH - 1.0 {
        award_point(game, true);
    }
}

/// Launch the ball from the centre toward the side in `serve_to_player`.
fn serve<R: Rng>(game: &mut PongGame, rng: &mut R) {
    let speed = game.difficulty.ball_speed();
    let direction = if game.serve_to_player { -1.0 } else { 1.0 };
    game.ball = Ball::centered();
    game.ball.vx = speed * direction;
    game.ball.vy = speed * rng.random_range(-0.5..=0.5);
    game.rally = 0;
}

fn reflect_off_walls(game: &mut PongGame) {
    let floor = FIELD_HEIGHT - 1.0;
    if game.ball.y < 0.0 {
        game.ball.y = -game.ball.y;
        game.ball.vy = -game.ball.vy;
        game.events.push(GameEvent::WallHit);
    } else if game.ball.y > floor {
        game.ball.y = 2.0 * floor - game.ball.y;
        game.ball.vy = -game.ball.vy;
        game.events.push(GameEvent::WallHit);
    }
}

fn check_paddles(game: &mut PongGame, prev_x: f64) {
    let player_face = PLAYER_X + 1.0;
    let cpu_face = CPU_X;

    if game.ball.vx < 0.0
        && prev_x >= player_face
        && game.ball.x < player_face
        && game.player.covers(game.ball.y)
    {
        game.ball.x = 2.0 * player_face - game.ball.x;
        let paddle = game.player;
        return_ball(game, &paddle);
    } else if game.ball.vx > 0.0
        && prev_x <= cpu_face
        && game.ball.x > cpu_face
        && game.cpu.covers(game.ball.y)
    {
        game.ball.x = 2.0 * cpu_face - game.ball.x;
        let paddle = game.cpu;
        return_ball(game, &paddle);
    }
}

/// Send the ball back with spin from where it met the paddle.
fn return_ball(game: &mut PongGame, paddle: &Paddle) {
    let max_speed = game.difficulty.ball_speed() * MAX_SPEED_FACTOR;
    let speed = (game.ball.vx.abs() * SPEEDUP_PER_HIT).min(max_speed);
    let offset = ((game.ball.y - paddle.center()) / (paddle.height / 2.0)).clamp(-1.0, 1.0);

    game.ball.vx = -game.ball.vx.signum() * speed;
    game.ball.vy = offset * speed * MAX_SPIN;

    game.rally += 1;
    game.longest_rally = game.longest_rally.max(game.rally);
    game.events.push(GameEvent::PaddleHit);
}

/// CPU follows the ball when it's coming its way, otherwise drifts to centre.
fn move_cpu(game: &mut PongGame) {
    let target = if game.ball_live() && game.ball.vx > 0.0 {
        game.ball.y
    } else {
        FIELD_HEIGHT / 2.0
    };
    let max_step = game.difficulty.cpu_speed();
    let delta = (target - game.cpu.center()).clamp(-max_step, max_step);
    game.cpu.shift(delta);
}

fn award_point(game: &mut PongGame, by_player: bool) {
    if by_player {
        game.player_score += 1;
    } else {
        game.cpu_score += 1;
    }
    game.events.push(GameEvent::PointScored { by_player });
    tracing::debug!(
        player = game.player_score,
        cpu = game.cpu_score,
        rally = game.rally,
        "pong point"
    );

    if game.player_score >= game.target_score {
        game.outcome = Some(Outcome::Won);
        game.events.push(GameEvent::Won);
    } else if game.cpu_score >= game.target_score {
        game.outcome = Some(Outcome::Lost);
        game.events.push(GameEvent::Lost);
    }

    // Next serve goes to whoever conceded
    game.serve_to_player = !by_player;
    game.ball = Ball::centered();
    game.serve_timer = SERVE_DELAY_TICKS;
    game.rally = 0;
}
