//! UI rendering for the bouncing-ball demo.

use crate::core::constants::{INFO_PANEL_WIDTH, MIN_CONTENT_HEIGHT, PIXELS_PER_COL, PIXELS_PER_ROW};
use crate::games::bounce::BounceGame;
use crate::ui::game_common::{
    compute_game_layout, create_game_layout, info_line, render_info_panel_frame,
    render_quit_status_bar, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle},
        Paragraph,
    },
    Frame,
};

/// World size in pixels for a terminal of size `area`.
pub fn world_size(area: Rect) -> (i32, i32) {
    let content = compute_game_layout(area, MIN_CONTENT_HEIGHT, INFO_PANEL_WIDTH).content;
    (
        (content.width as i32 * PIXELS_PER_COL).max(1),
        (content.height as i32 * PIXELS_PER_ROW).max(1),
    )
}

/// Render the bounce scene.
pub fn render_bounce(frame: &mut Frame, area: Rect, game: &BounceGame, sound_label: &str) {
    let layout = create_game_layout(
        frame,
        area,
        " Bouncing Ball ",
        Color::Red,
        MIN_CONTENT_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_field(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, sound_label);
}

/// White field with a filled red ball. World y grows downward, canvas y grows
/// upward, so rows are flipped.
fn render_field(frame: &mut Frame, area: Rect, game: &BounceGame) {
    let width = game.width as f64;
    let height = game.height as f64;
    let cx = game.x as f64;
    let cy = height - game.y as f64;
    let radius = game.radius as f64;

    let canvas = Canvas::default()
        .background_color(Color::White)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            // Concentric outlines fill the disc
            let step = (PIXELS_PER_COL as f64 / 2.0).max(1.0);
            let mut r = radius;
            while r > 0.0 {
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: r,
                    color: Color::Red,
                });
                r -= step;
            }
        });
    frame.render_widget(canvas, area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &BounceGame) {
    if render_quit_status_bar(frame, area, game.quit_pending) {
        return;
    }

    let (status, color) = if game.paused {
        ("Paused", Color::Yellow)
    } else {
        ("Bouncing", Color::Green)
    };
    render_status_bar(
        frame,
        area,
        status,
        color,
        &[("[←→]", "Steer"), ("[Space]", "Pause"), ("[Esc]", "Leave")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &BounceGame, sound_label: &str) {
    let inner = render_info_panel_frame(frame, area);

    let lines = vec![
        info_line("Heading", game.heading.name().to_string(), Color::White),
        info_line("Speed", format!("{} px", game.vx), Color::White),
        info_line("Fall", format!("{} px", game.vy), Color::White),
        Line::from(""),
        info_line("Walls", game.wall_hits.to_string(), Color::Cyan),
        info_line("Bounces", game.floor_bounces.to_string(), Color::Cyan),
        Line::from(""),
        info_line(
            "World",
            format!("{}x{}", game.width, game.height),
            Color::DarkGray,
        ),
        info_line("Sound", sound_label.to_string(), Color::DarkGray),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_size_scales_content_area() {
        let area = Rect::new(0, 0, 80, 24);
        let content = compute_game_layout(area, MIN_CONTENT_HEIGHT, INFO_PANEL_WIDTH).content;
        let (w, h) = world_size(area);
        assert_eq!(w, content.width as i32 * PIXELS_PER_COL);
        assert_eq!(h, content.height as i32 * PIXELS_PER_ROW);
    }

    #[test]
    fn test_world_size_never_zero() {
        let (w, h) = world_size(Rect::new(0, 0, 0, 0));
        assert!(w >= 1);
        assert!(h >= 1);
    }
}
