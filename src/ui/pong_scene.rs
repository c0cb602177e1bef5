//! UI rendering for Pong.

use crate::core::constants::{INFO_PANEL_WIDTH, MIN_CONTENT_HEIGHT};
use crate::games::pong::{Paddle, PongGame, CPU_X, FIELD_HEIGHT, FIELD_WIDTH, PLAYER_X};
use crate::games::Outcome;
use crate::ui::game_common::{
    create_game_layout, info_line, render_game_over_overlay, render_info_panel_frame,
    render_quit_status_bar, render_status_bar,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the Pong scene.
pub fn render_pong(frame: &mut Frame, area: Rect, game: &PongGame) {
    if let Some(outcome @ (Outcome::Won | Outcome::Lost)) = game.outcome {
        render_pong_game_over(frame, area, game, outcome);
        return;
    }

    let layout = create_game_layout(
        frame,
        area,
        " Pong ",
        Color::Green,
        MIN_CONTENT_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_field(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Display column for a paddle at field column `x`.
fn paddle_column(x: f64, x_scale: f64, width: usize) -> usize {
    ((x * x_scale) as usize).min(width - 1)
}

/// Whether display row `row` shows part of `paddle`.
fn paddle_on_row(paddle: &Paddle, row: usize, y_scale: f64) -> bool {
    let top = (paddle.top * y_scale).round() as usize;
    let bottom = ((paddle.top + paddle.height) * y_scale).round() as usize;
    row >= top && row < bottom.max(top + 1)
}

fn render_field(frame: &mut Frame, area: Rect, game: &PongGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    // Scale field coordinates to the display area
    let x_scale = width as f64 / FIELD_WIDTH;
    let y_scale = height as f64 / FIELD_HEIGHT;

    let player_col = paddle_column(PLAYER_X, x_scale, width);
    let cpu_col = paddle_column(CPU_X, x_scale, width);
    let net_col = width / 2;
    let ball_pos = game.ball_live().then(|| {
        (
            ((game.ball.x * x_scale) as usize).min(width - 1),
            ((game.ball.y * y_scale) as usize).min(height - 1),
        )
    });

    let paddle_style = Style::default().fg(Color::White);
    let ball_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let net_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let span = if ball_pos == Some((col, row)) {
                Span::styled("●", ball_style)
            } else if col == player_col && paddle_on_row(&game.player, row, y_scale) {
                Span::styled("█", paddle_style)
            } else if col == cpu_col && paddle_on_row(&game.cpu, row, y_scale) {
                Span::styled("█", paddle_style)
            } else if col == net_col && row % 2 == 0 {
                Span::styled("┊", net_style)
            } else {
                Span::raw(" ")
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);

    // Big score at the top of the field
    let score = format!("{}   {}", game.player_score, game.cpu_score);
    let score_line = Paragraph::new(Line::styled(
        score,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(score_line, Rect { height: 1, ..area });
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &PongGame) {
    if render_quit_status_bar(frame, area, game.quit_pending) {
        return;
    }

    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            &format!("First to {} wins", game.target_score),
            Color::Yellow,
            &[("[Space]", "Start"), ("[Esc]", "Leave")],
        );
        return;
    }

    let status = if game.ball_live() {
        "Rally!".to_string()
    } else if game.serve_to_player {
        "Serving to you...".to_string()
    } else {
        "Serving to CPU...".to_string()
    };
    render_status_bar(
        frame,
        area,
        &status,
        Color::White,
        &[("[↑↓/W/S]", "Move"), ("[Esc]", "Leave")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &PongGame) {
    let inner = render_info_panel_frame(frame, area);

    let lines = vec![
        info_line("Difficulty", game.difficulty.name().to_string(), Color::Yellow),
        info_line("Target", game.target_score.to_string(), Color::White),
        Line::from(""),
        info_line("You", game.player_score.to_string(), Color::Green),
        info_line("CPU", game.cpu_score.to_string(), Color::Red),
        Line::from(""),
        info_line("Rally", game.rally.to_string(), Color::Cyan),
        info_line("Best", game.longest_rally.to_string(), Color::Cyan),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_pong_game_over(frame: &mut Frame, area: Rect, game: &PongGame, outcome: Outcome) {
    let (title, message) = if outcome == Outcome::Won {
        (":: VICTORY ::", "You beat the computer!")
    } else {
        (":: DEFEAT ::", "The computer takes the match.")
    };
    render_game_over_overlay(
        frame,
        area,
        outcome,
        title,
        message,
        &format!(
            "Final score {} - {}  (longest rally {})",
            game.player_score, game.cpu_score, game.longest_rally
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_columns_at_field_edges() {
        let x_scale = 40.0 / FIELD_WIDTH;
        assert_eq!(paddle_column(PLAYER_X, x_scale, 40), 0);
        assert_eq!(paddle_column(CPU_X, x_scale, 40), 38);
    }

    #[test]
    fn test_paddle_rows_scale() {
        let paddle = Paddle {
            top: 5.0,
            height: 5.0,
        };
        // One display row per field row
        assert!(paddle_on_row(&paddle, 5, 1.0));
        assert!(paddle_on_row(&paddle, 9, 1.0));
        assert!(!paddle_on_row(&paddle, 10, 1.0));
        // Squashed field still shows at least one row
        assert!(paddle_on_row(&paddle, 1, 0.2));
    }
}
