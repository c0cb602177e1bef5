//! Terminal rendering. One scene per screen; all share `game_common`.

pub mod bounce_scene;
pub mod game_common;
pub mod menu_scene;
pub mod pattern_scene;
pub mod pong_scene;
pub mod swap_scene;
pub mod tile_board;

use crate::app::{App, Screen};
use crate::games::ActiveGame;
use ratatui::Frame;

/// Draw the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let sound_label = app.sound.output_name();

    match &app.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, &app.menu, sound_label),
        Screen::Playing(ActiveGame::Bounce(game)) => {
            bounce_scene::render_bounce(frame, area, game, sound_label)
        }
        Screen::Playing(ActiveGame::Pattern(game)) => {
            pattern_scene::render_pattern(frame, area, game)
        }
        Screen::Playing(ActiveGame::Swap(game)) => swap_scene::render_swap(frame, area, game),
        Screen::Playing(ActiveGame::Pong(game)) => pong_scene::render_pong(frame, area, game),
    }
}
