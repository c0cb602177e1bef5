//! UI rendering for the tile-swap puzzle and its skins.

use crate::core::constants::{INFO_PANEL_WIDTH, MIN_CONTENT_HEIGHT};
use crate::games::swap::{tiles_in_place, Skin, SwapGame};
use crate::ui::game_common::{
    compute_game_layout, create_game_layout, info_line, render_banner,
    render_info_panel_frame, render_quit_status_bar, render_status_bar,
};
use crate::ui::tile_board::{board_geometry, render_board, BoardGeometry, TileFace};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const NEON: [Color; 9] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::LightRed,
    Color::LightGreen,
    Color::LightBlue,
];

const PASTEL: [Color; 9] = [
    Color::Rgb(255, 179, 186),
    Color::Rgb(255, 223, 186),
    Color::Rgb(255, 255, 186),
    Color::Rgb(186, 255, 201),
    Color::Rgb(186, 225, 255),
    Color::Rgb(213, 186, 255),
    Color::Rgb(255, 204, 229),
    Color::Rgb(204, 255, 229),
    Color::Rgb(229, 229, 204),
];

const PASTEL_GLYPHS: [&str; 9] = ["♠", "♥", "♦", "♣", "★", "●", "▲", "■", "◆"];

/// How tile `value` looks in `skin`.
pub fn tile_face(skin: Skin, value: u8) -> TileFace {
    let index = value as usize % 9;
    match skin {
        Skin::Classic => TileFace {
            background: Color::Blue,
            foreground: Color::White,
            label: (index + 1).to_string(),
        },
        Skin::Neon => TileFace {
            background: NEON[index],
            foreground: Color::Black,
            label: (index + 1).to_string(),
        },
        Skin::Pastel => TileFace {
            background: PASTEL[index],
            foreground: Color::Black,
            label: PASTEL_GLYPHS[index].to_string(),
        },
        Skin::Mono => TileFace {
            background: if index % 2 == 0 {
                Color::Gray
            } else {
                Color::DarkGray
            },
            foreground: Color::Black,
            label: char::from(b'A' + index as u8).to_string(),
        },
    }
}

/// Geometry of the puzzle board for a terminal of size `area`.
pub fn board(area: Rect) -> Option<BoardGeometry> {
    let content = compute_game_layout(area, MIN_CONTENT_HEIGHT, INFO_PANEL_WIDTH).content;
    board_geometry(content)
}

/// Render the swap puzzle scene.
pub fn render_swap(frame: &mut Frame, area: Rect, game: &SwapGame) {
    let title = format!(" Tile Swap [{}] ", game.skin.name());
    let layout = create_game_layout(
        frame,
        area,
        &title,
        Color::Cyan,
        MIN_CONTENT_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    if let Some(geometry) = board_geometry(layout.content) {
        let skin = game.skin;
        let cursor = (!game.solved).then_some(game.cursor);
        render_board(
            frame,
            &geometry,
            &game.grid,
            cursor,
            game.selected,
            |value| tile_face(skin, value),
        );
    }

    if game.solved {
        render_banner(
            frame,
            layout.content,
            Color::Green,
            "Solved!",
            &format!("{} swaps", game.moves),
            "[Enter] New puzzle",
        );
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &SwapGame) {
    if render_quit_status_bar(frame, area, game.quit_pending) {
        return;
    }

    let (status, color) = if game.solved {
        ("Puzzle solved!", Color::Green)
    } else if game.selected.is_some() {
        ("Pick a tile to swap with", Color::Yellow)
    } else {
        ("Pick a tile", Color::White)
    };
    render_status_bar(
        frame,
        area,
        status,
        color,
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Select"),
            ("[K]", "Skin"),
            ("[N]", "Shuffle"),
            ("[Esc]", "Leave"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &SwapGame) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines = vec![
        info_line("Skin", game.skin.name().to_string(), Color::Cyan),
        info_line("Swaps", game.moves.to_string(), Color::White),
        info_line(
            "In place",
            format!("{}/9", tiles_in_place(&game.grid, &game.solution)),
            Color::White,
        ),
        info_line("Solved", game.puzzles_solved.to_string(), Color::Green),
        Line::from(""),
        Line::from(Span::styled(" Goal:", Style::default().fg(Color::DarkGray))),
    ];

    // Miniature of the solution in the current skin
    for row in game.solution.iter() {
        let mut spans = vec![Span::raw(" ")];
        for value in row {
            let face = tile_face(game.skin, *value);
            spans.push(Span::styled(
                format!("{:^3}", face.label),
                Style::default().bg(face.background).fg(face.foreground),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_skin_labels_tiles_distinctly() {
        for skin in Skin::ALL {
            let mut labels: Vec<String> = (0..9).map(|v| tile_face(skin, v).label).collect();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), 9, "{:?}", skin);
        }
    }

    #[test]
    fn test_board_fits_content() {
        let area = Rect::new(0, 0, 80, 24);
        let content = compute_game_layout(area, MIN_CONTENT_HEIGHT, INFO_PANEL_WIDTH).content;
        let geometry = board(area).unwrap();
        let rect = geometry.rect();
        assert!(rect.x >= content.x && rect.right() <= content.right());
        assert!(rect.y >= content.y && rect.bottom() <= content.bottom());
    }
}
