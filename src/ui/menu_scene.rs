//! Game select menu rendering.

use crate::games::{GameKind, GameMenu};
use crate::utils::build_info::version_line;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the menu: game list on the left, details of the highlighted game
/// on the right.
pub fn render_menu(frame: &mut Frame, area: Rect, menu: &GameMenu, sound_label: &str) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(20)])
        .split(rows[0]);

    render_game_list(frame, columns[0], menu);
    render_detail(frame, columns[1], menu, sound_label);

    let help = Paragraph::new("[↑/↓] Choose  [←/→] Option  [Enter] Play  [Esc/Q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[1]);
}

fn render_game_list(frame: &mut Frame, area: Rect, menu: &GameMenu) {
    let items: Vec<ListItem> = GameKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let selected = i == menu.selected_index;
            let prefix = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", prefix, kind.name())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

fn render_detail(frame: &mut Frame, area: Rect, menu: &GameMenu, sound_label: &str) {
    let kind = menu.selected();

    let mut lines = vec![
        Line::from(Span::styled(
            kind.name(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            kind.description(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    if let Some(option) = menu.option_label() {
        lines.push(Line::from(vec![
            Span::styled("< ", Style::default().fg(Color::DarkGray)),
            Span::styled(option, Style::default().fg(Color::Cyan)),
            Span::styled(" >", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("Sound: {}", sound_label),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        version_line(),
        Style::default().fg(Color::DarkGray),
    )));

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true });
    let padded = Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(2),
        ..area
    };
    frame.render_widget(detail, padded);
}
