//! Game select menu.
//!
//! Lists every game; the selected entry may carry an option (Pong difficulty,
//! swap puzzle skin) changed with Left/Right.

use super::{GameKind, LaunchOptions, PongDifficulty, Skin};
use crate::core::config::Config;

/// Input actions for the menu (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Left,
    Right,
    Select, // Enter/Space
    Quit,   // Esc/Q
    Other,
}

/// What the app should do after a menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(GameKind),
    Quit,
}

#[derive(Debug, Clone)]
pub struct GameMenu {
    pub selected_index: usize,
    pub pong_difficulty: PongDifficulty,
    pub skin: Skin,
}

impl GameMenu {
    pub fn new(config: &Config) -> Self {
        Self {
            selected_index: 0,
            pong_difficulty: config.pong_difficulty,
            skin: config.swap_skin,
        }
    }

    pub fn selected(&self) -> GameKind {
        GameKind::from_index(self.selected_index)
    }

    /// Move the highlight to `kind` (used when a game is launched from the CLI).
    pub fn select(&mut self, kind: GameKind) {
        self.selected_index = GameKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
    }

    pub fn navigate_up(&mut self) {
        let count = GameKind::ALL.len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }

    pub fn navigate_down(&mut self) {
        self.selected_index = (self.selected_index + 1) % GameKind::ALL.len();
    }

    /// Label of the option shown next to the selected game, if it has one.
    pub fn option_label(&self) -> Option<String> {
        match self.selected() {
            GameKind::Pong => Some(format!("Difficulty: {}", self.pong_difficulty.name())),
            GameKind::Swap => Some(format!("Skin: {}", self.skin.name())),
            _ => None,
        }
    }

    fn change_option(&mut self, forward: bool) {
        match self.selected() {
            GameKind::Pong => {
                let count = PongDifficulty::ALL.len();
                let index = self.pong_difficulty.index();
                let next = if forward {
                    (index + 1) % count
                } else {
                    (index + count - 1) % count
                };
                self.pong_difficulty = PongDifficulty::from_index(next);
            }
            GameKind::Swap => {
                self.skin = if forward {
                    self.skin.next()
                } else {
                    self.skin.prev()
                };
            }
            _ => {}
        }
    }

    /// Options for starting a game from the current menu choices.
    pub fn launch_options(&self, config: &Config, world_width: i32, world_height: i32) -> LaunchOptions {
        LaunchOptions {
            skin: self.skin,
            pong_difficulty: self.pong_difficulty,
            pong_target_score: config.pong_target_score,
            bounce_radius: config.bounce_radius,
            world_width,
            world_height,
        }
    }
}

/// Process a menu input.
pub fn process_input(menu: &mut GameMenu, input: MenuInput) -> MenuAction {
    match input {
        MenuInput::Up => menu.navigate_up(),
        MenuInput::Down => menu.navigate_down(),
        MenuInput::Left => menu.change_option(false),
        MenuInput::Right => menu.change_option(true),
        MenuInput::Select => return MenuAction::Start(menu.selected()),
        MenuInput::Quit => return MenuAction::Quit,
        MenuInput::Other => {}
    }
    MenuAction::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> GameMenu {
        GameMenu::new(&Config::default())
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = menu();
        process_input(&mut menu, MenuInput::Up);
        assert_eq!(menu.selected(), GameKind::Pong);
        process_input(&mut menu, MenuInput::Down);
        assert_eq!(menu.selected(), GameKind::Bounce);
    }

    #[test]
    fn test_select_starts_highlighted_game() {
        let mut menu = menu();
        process_input(&mut menu, MenuInput::Down);
        assert_eq!(
            process_input(&mut menu, MenuInput::Select),
            MenuAction::Start(GameKind::PatternCycle)
        );
    }

    #[test]
    fn test_quit() {
        let mut menu = menu();
        assert_eq!(process_input(&mut menu, MenuInput::Quit), MenuAction::Quit);
    }

    #[test]
    fn test_pong_difficulty_option() {
        let mut menu = menu();
        menu.select(GameKind::Pong);
        process_input(&mut menu, MenuInput::Right);
        assert_eq!(menu.pong_difficulty, PongDifficulty::Apprentice);
        process_input(&mut menu, MenuInput::Left);
        process_input(&mut menu, MenuInput::Left);
        assert_eq!(menu.pong_difficulty, PongDifficulty::Master);
        assert_eq!(menu.option_label().as_deref(), Some("Difficulty: Master"));
    }

    #[test]
    fn test_skin_option() {
        let mut menu = menu();
        menu.select(GameKind::Swap);
        process_input(&mut menu, MenuInput::Right);
        assert_eq!(menu.skin, Skin::Neon);
        assert_eq!(menu.option_label().as_deref(), Some("Skin: Neon"));
    }

    #[test]
    fn test_games_without_options_ignore_left_right() {
        let mut menu = menu();
        process_input(&mut menu, MenuInput::Right);
        assert_eq!(menu.skin, Skin::Classic);
        assert_eq!(menu.pong_difficulty, PongDifficulty::Novice);
        assert!(menu.option_label().is_none());
    }

    #[test]
    fn test_launch_options_carry_choices() {
        let config = Config {
            pong_target_score: 3,
            ..Config::default()
        };
        let mut menu = GameMenu::new(&config);
        menu.skin = Skin::Pastel;
        let options = menu.launch_options(&config, 320, 240);
        assert_eq!(options.skin, Skin::Pastel);
        assert_eq!(options.pong_target_score, 3);
        assert_eq!(options.world_width, 320);
    }
}
