//! UI rendering for the pattern tile games.

use crate::core::constants::{INFO_PANEL_WIDTH, MIN_CONTENT_HEIGHT};
use crate::games::pattern::{PatternGame, PatternVariant};
use crate::games::Outcome;
use crate::ui::game_common::{
    compute_game_layout, create_game_layout, info_line, render_banner,
    render_game_over_overlay, render_info_panel_frame, render_quit_status_bar,
    render_status_bar,
};
use crate::ui::tile_board::{board_geometry, render_board, BoardGeometry, TileFace};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Tile colours by value.
const PALETTE: [Color; 4] = [Color::DarkGray, Color::Red, Color::Blue, Color::Yellow];
/// Shapes drawn on tiles so colours can be told apart without colour.
const GLYPHS: [&str; 4] = ["", "●", "▲", "■"];

fn tile_face(value: u8) -> TileFace {
    let index = (value as usize).min(PALETTE.len() - 1);
    TileFace {
        background: PALETTE[index],
        foreground: Color::Black,
        label: GLYPHS[index].to_string(),
    }
}

/// Player board (left) and target board (right) areas, each below a
/// one-line caption.
fn board_areas(content: Rect) -> (Rect, Rect, Rect, Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content);

    let split = |half: Rect| {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(half);
        (rows[0], rows[1])
    };
    let (player_caption, player) = split(halves[0]);
    let (target_caption, target) = split(halves[1]);
    (player_caption, player, target_caption, target)
}

/// Geometry of the player's board for a terminal of size `area`.
pub fn player_board(area: Rect) -> Option<BoardGeometry> {
    let content = compute_game_layout(area, MIN_CONTENT_HEIGHT, INFO_PANEL_WIDTH).content;
    let (_, player, _, _) = board_areas(content);
    board_geometry(player)
}

/// Render a pattern game scene.
pub fn render_pattern(frame: &mut Frame, area: Rect, game: &PatternGame) {
    if game.outcome == Some(Outcome::Won) {
        render_game_over_overlay(
            frame,
            area,
            Outcome::Won,
            ":: ALL PATTERNS MATCHED ::",
            &format!("You cleared all {} levels.", game.level_count()),
            &format!("Total moves: {}", game.total_moves),
        );
        return;
    }

    let title = format!(" Pattern: {} ", game.variant.name());
    let layout = create_game_layout(
        frame,
        area,
        &title,
        Color::Magenta,
        MIN_CONTENT_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_boards(frame, layout.content, game);
    if game.solved {
        let hint = if game.is_last_level() {
            "[Enter] Finish"
        } else {
            "[Enter] Next level"
        };
        render_banner(
            frame,
            layout.content,
            Color::Green,
            "Matched!",
            &format!("{} in {} moves", game.level().name, game.moves),
            hint,
        );
    }
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_boards(frame: &mut Frame, content: Rect, game: &PatternGame) {
    let (player_caption, player, target_caption, target) = board_areas(content);

    let caption = |text: &str| {
        Paragraph::new(Line::styled(
            text.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
    };
    frame.render_widget(caption("Your board"), player_caption);
    frame.render_widget(caption("Target"), target_caption);

    let cursor = (!game.solved).then_some(game.cursor);
    if let Some(geometry) = board_geometry(player) {
        render_board(frame, &geometry, &game.grid, cursor, None, tile_face);
    }
    if let Some(geometry) = board_geometry(target) {
        render_board(frame, &geometry, game.target(), None, None, tile_face);
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &PatternGame) {
    if render_quit_status_bar(frame, area, game.quit_pending) {
        return;
    }

    if game.solved {
        render_status_bar(
            frame,
            area,
            "Pattern matched!",
            Color::Green,
            &[("[Enter]", "Continue"), ("[Esc]", "Leave")],
        );
        return;
    }

    let status = match game.variant {
        PatternVariant::Cycle => "Each press moves a tile to its next colour",
        PatternVariant::Flip => "Each press changes a tile and its neighbours",
        PatternVariant::Paint => "Each press paints a tile with the brush",
    };
    let controls: &[(&str, &str)] = match game.variant {
        PatternVariant::Paint => &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Paint"),
            ("[1-4/B]", "Brush"),
            ("[R]", "Reset"),
            ("[Esc]", "Leave"),
        ],
        _ => &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Press"),
            ("[R]", "Reset"),
            ("[Esc]", "Leave"),
        ],
    };
    render_status_bar(frame, area, status, Color::White, controls);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &PatternGame) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines = vec![
        info_line("Level", game.level().name.to_string(), Color::Magenta),
        info_line(
            "Stage",
            format!("{}/{}", game.level_index + 1, game.level_count()),
            Color::White,
        ),
        info_line("Colours", game.colors().to_string(), Color::White),
        Line::from(""),
        info_line("Moves", game.moves.to_string(), Color::Cyan),
        info_line("Total", game.total_moves.to_string(), Color::Cyan),
    ];

    if game.variant == PatternVariant::Paint {
        let brush = tile_face(game.brush);
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Brush: ", Style::default().fg(Color::DarkGray)),
            Span::styled("    ", Style::default().bg(brush.background)),
            Span::styled(
                format!(" {}", game.brush + 1),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
