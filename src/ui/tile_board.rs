//! 3x3 tile board drawing and mouse hit-testing.
//!
//! Geometry is computed from the area alone, so the renderer and the mouse
//! handler agree on where every tile is.

use crate::core::grid::{Cell, Grid, GRID_SIZE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Largest tile height in rows. Tiles are twice as wide as tall.
const MAX_TILE_HEIGHT: u16 = 5;

/// Position and tile size of a board centred in an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub x: u16,
    pub y: u16,
    pub tile_width: u16,
    pub tile_height: u16,
}

/// Fit a board into `area`, or `None` if not even 1-row tiles fit.
pub fn board_geometry(area: Rect) -> Option<BoardGeometry> {
    let n = GRID_SIZE as u16;
    let tile_height = (area.height / n).min(area.width / (n * 2)).min(MAX_TILE_HEIGHT);
    if tile_height == 0 {
        return None;
    }
    let tile_width = tile_height * 2;

    Some(BoardGeometry {
        x: area.x + (area.width - tile_width * n) / 2,
        y: area.y + (area.height - tile_height * n) / 2,
        tile_width,
        tile_height,
    })
}

impl BoardGeometry {
    pub fn tile_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.x + cell.col as u16 * self.tile_width,
            self.y + cell.row as u16 * self.tile_height,
            self.tile_width,
            self.tile_height,
        )
    }

    /// Whole board outline.
    pub fn rect(&self) -> Rect {
        let n = GRID_SIZE as u16;
        Rect::new(self.x, self.y, self.tile_width * n, self.tile_height * n)
    }

    /// Tile under a terminal position.
    pub fn hit(&self, column: u16, row: u16) -> Option<Cell> {
        if column < self.x || row < self.y {
            return None;
        }
        let cell = Cell::new(
            ((row - self.y) / self.tile_height) as usize,
            ((column - self.x) / self.tile_width) as usize,
        );
        cell.is_valid().then_some(cell)
    }
}

/// How one tile looks.
#[derive(Debug, Clone)]
pub struct TileFace {
    pub background: Color,
    pub foreground: Color,
    pub label: String,
}

/// Draw every tile, outlining the cursor (white) and selection (yellow).
pub fn render_board<F>(
    frame: &mut Frame,
    geometry: &BoardGeometry,
    grid: &Grid,
    cursor: Option<Cell>,
    selected: Option<Cell>,
    face: F,
) where
    F: Fn(u8) -> TileFace,
{
    frame.render_widget(Clear, geometry.rect());
    for (row, values) in grid.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            let cell = Cell::new(row, col);
            let tile = face(*value);
            let highlight = if selected == Some(cell) {
                Some(Color::Yellow)
            } else if cursor == Some(cell) {
                Some(Color::White)
            } else {
                None
            };
            render_tile(frame, geometry.tile_rect(cell), &tile, highlight);
        }
    }
}

fn render_tile(frame: &mut Frame, rect: Rect, tile: &TileFace, highlight: Option<Color>) {
    let base = Style::default().bg(tile.background).fg(tile.foreground);
    let mut block = Block::default().style(base);
    // A 1-row tile has no room for a border; highlight the label instead
    let mut label_style = base.add_modifier(Modifier::BOLD);
    if let Some(color) = highlight {
        if rect.height >= 3 {
            block = block.borders(Borders::ALL).border_style(
                Style::default()
                    .fg(color)
                    .bg(tile.background)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            label_style = label_style.add_modifier(Modifier::REVERSED);
        }
    }

    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.height == 0 || tile.label.is_empty() {
        return;
    }

    let label_area = Rect {
        y: inner.y + (inner.height - 1) / 2,
        height: 1,
        ..inner
    };
    let label = Paragraph::new(Line::styled(tile.label.clone(), label_style))
        .alignment(Alignment::Center);
    frame.render_widget(label, label_area);
}
