//! Terminal key and mouse mapping.
//!
//! Translates crossterm events into each screen's UI-agnostic input enum.
//! Only key presses count; repeats and releases reported by some terminals
//! are dropped so one physical press is one action.

use crate::core::grid::{Cell, MoveDirection};
use crate::games::bounce::BounceInput;
use crate::games::pattern::PatternInput;
use crate::games::pong::PongInput;
use crate::games::swap::SwapInput;
use crate::games::{ActiveGame, MenuInput};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Whether the event is a real key press.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Ctrl+C leaves the app from any screen.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

fn direction(code: KeyCode) -> Option<MoveDirection> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MoveDirection::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MoveDirection::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveDirection::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveDirection::Right),
        _ => None,
    }
}

pub fn map_menu_key(key: &KeyEvent) -> MenuInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Left | KeyCode::Char('h') => MenuInput::Left,
        KeyCode::Right | KeyCode::Char('l') => MenuInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Quit,
        _ => MenuInput::Other,
    }
}

pub fn map_bounce_key(key: &KeyEvent) -> BounceInput {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => BounceInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => BounceInput::Right,
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => BounceInput::TogglePause,
        KeyCode::Esc => BounceInput::Quit,
        _ => BounceInput::Other,
    }
}

pub fn map_pattern_key(key: &KeyEvent) -> PatternInput {
    if let Some(direction) = direction(key.code) {
        return PatternInput::Move(direction);
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => PatternInput::Activate,
        // Brushes are shown 1-based
        KeyCode::Char(c @ '1'..='4') => PatternInput::Brush(c as u8 - b'1'),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Tab => PatternInput::NextBrush,
        KeyCode::Char('r') | KeyCode::Char('R') => PatternInput::Reset,
        KeyCode::Esc => PatternInput::Quit,
        _ => PatternInput::Other,
    }
}

pub fn map_swap_key(key: &KeyEvent) -> SwapInput {
    if let Some(direction) = direction(key.code) {
        return SwapInput::Move(direction);
    }
    match key.code {
        KeyCode::Enter => SwapInput::Confirm,
        KeyCode::Char(' ') => SwapInput::Select,
        KeyCode::Char('k') | KeyCode::Char('K') => SwapInput::NextSkin,
        KeyCode::Char('n') | KeyCode::Char('N') => SwapInput::NewPuzzle,
        KeyCode::Esc => SwapInput::Quit,
        _ => SwapInput::Other,
    }
}

pub fn map_pong_key(key: &KeyEvent) -> PongInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => PongInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => PongInput::Down,
        KeyCode::Char(' ') | KeyCode::Enter => PongInput::Start,
        KeyCode::Esc => PongInput::Quit,
        _ => PongInput::Other,
    }
}

/// Board tile under a left click, for the games that have a board.
///
/// `area` is the full terminal area the scene was drawn into.
pub fn clicked_cell(game: &ActiveGame, mouse: &MouseEvent, area: Rect) -> Option<Cell> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let geometry = match game {
        ActiveGame::Pattern(_) => ui::pattern_scene::player_board(area)?,
        ActiveGame::Swap(_) => ui::swap_scene::board(area)?,
        ActiveGame::Bounce(_) | ActiveGame::Pong(_) => return None,
    };
    geometry.hit(mouse.column, mouse.row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{PatternGame, PatternVariant};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_release_is_not_press() {
        let mut key = press(KeyCode::Enter);
        assert!(is_press(&key));
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        assert!(!is_press(&key));
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&key));
        assert!(!is_interrupt(&press(KeyCode::Char('c'))));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(map_menu_key(&press(KeyCode::Up)), MenuInput::Up);
        assert_eq!(map_menu_key(&press(KeyCode::Enter)), MenuInput::Select);
        assert_eq!(map_menu_key(&press(KeyCode::Char('q'))), MenuInput::Quit);
        assert_eq!(map_menu_key(&press(KeyCode::Char('x'))), MenuInput::Other);
    }

    #[test]
    fn test_pattern_brush_keys_are_zero_based() {
        assert_eq!(
            map_pattern_key(&press(KeyCode::Char('1'))),
            PatternInput::Brush(0)
        );
        assert_eq!(
            map_pattern_key(&press(KeyCode::Char('4'))),
            PatternInput::Brush(3)
        );
        assert_eq!(map_pattern_key(&press(KeyCode::Char('5'))), PatternInput::Other);
    }

    #[test]
    fn test_wasd_moves_cursor() {
        assert_eq!(
            map_swap_key(&press(KeyCode::Char('w'))),
            SwapInput::Move(MoveDirection::Up)
        );
        assert_eq!(
            map_pattern_key(&press(KeyCode::Char('d'))),
            PatternInput::Move(MoveDirection::Right)
        );
    }

    #[test]
    fn test_game_keys() {
        assert_eq!(map_bounce_key(&press(KeyCode::Char(' '))), BounceInput::TogglePause);
        assert_eq!(map_pong_key(&press(KeyCode::Down)), PongInput::Down);
        assert_eq!(map_swap_key(&press(KeyCode::Char('k'))), SwapInput::NextSkin);
        assert_eq!(map_swap_key(&press(KeyCode::Esc)), SwapInput::Quit);
        assert_eq!(map_swap_key(&press(KeyCode::Enter)), SwapInput::Confirm);
        assert_eq!(map_swap_key(&press(KeyCode::Char(' '))), SwapInput::Select);
    }

    #[test]
    fn test_click_on_pattern_board() {
        let area = Rect::new(0, 0, 100, 30);
        let game = ActiveGame::Pattern(PatternGame::new(PatternVariant::Cycle));
        let geometry = ui::pattern_scene::player_board(area).unwrap();
        let tile = geometry.tile_rect(Cell::new(2, 1));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: tile.x,
            row: tile.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(clicked_cell(&game, &click, area), Some(Cell::new(2, 1)));

        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click
        };
        assert_eq!(clicked_cell(&game, &right_click, area), None);
    }
}
