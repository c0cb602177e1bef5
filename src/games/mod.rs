//! The games: Bounce, the pattern tile games, the swap puzzle, and Pong.
//!
//! Each game is a plain state struct plus UI-agnostic logic functions. The
//! app loop feeds them mapped input and fixed-rate steps.

/// Generate the standard `ALL`, `from_index()`, and `name()` methods shared by
/// all four-variant difficulty enums (Novice / Apprentice / Journeyman / Master).
macro_rules! difficulty_enum_impl {
    ($name:ident) => {
        impl $name {
            pub const ALL: [$name; 4] = [
                $name::Novice,
                $name::Apprentice,
                $name::Journeyman,
                $name::Master,
            ];

            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or($name::Novice)
            }

            pub fn index(&self) -> usize {
                Self::ALL.iter().position(|d| d == self).unwrap_or(0)
            }

            pub fn name(&self) -> &'static str {
                match self {
                    Self::Novice => "Novice",
                    Self::Apprentice => "Apprentice",
                    Self::Journeyman => "Journeyman",
                    Self::Master => "Master",
                }
            }
        }
    };
}

pub mod bounce;
pub mod menu;
pub mod pattern;
pub mod pong;
pub mod swap;

pub use bounce::BounceGame;
pub use menu::{GameMenu, MenuAction, MenuInput};
pub use pattern::{PatternGame, PatternVariant};
pub use pong::{PongDifficulty, PongGame};
pub use swap::{Skin, SwapGame};

use rand::Rng;

/// Every game reachable from the menu or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Bounce,
    PatternCycle,
    PatternFlip,
    PatternPaint,
    Swap,
    Pong,
}

impl GameKind {
    pub const ALL: [GameKind; 6] = [
        GameKind::Bounce,
        GameKind::PatternCycle,
        GameKind::PatternFlip,
        GameKind::PatternPaint,
        GameKind::Swap,
        GameKind::Pong,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameKind::Bounce)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bounce => "Bouncing Ball",
            Self::PatternCycle => "Pattern: Cycle",
            Self::PatternFlip => "Pattern: Flip",
            Self::PatternPaint => "Pattern: Paint",
            Self::Swap => "Tile Swap",
            Self::Pong => "Pong",
        }
    }

    /// Name accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Bounce => "bounce",
            Self::PatternCycle => "cycle",
            Self::PatternFlip => "flip",
            Self::PatternPaint => "paint",
            Self::Swap => "swap",
            Self::Pong => "pong",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|kind| kind.slug() == slug)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Bounce => {
                "A ball falls under gravity, bounces off the floor and rolls between \
                 the walls. Steer it with the arrow keys, pause with Space."
            }
            Self::PatternCycle => {
                "Make your board match the target. Each tile you press moves to the \
                 next colour."
            }
            Self::PatternFlip => {
                "Make your board match the target. Pressing a tile flips it and its \
                 neighbours."
            }
            Self::PatternPaint => {
                "Make your board match the target. Pick a brush colour with 1-4 and \
                 paint tiles directly."
            }
            Self::Swap => {
                "The tiles are shuffled. Select two tiles to swap them until the \
                 board is back in order. Change skins with K."
            }
            Self::Pong => {
                "Classic paddle-ball against the computer. First to the target score \
                 wins."
            }
        }
    }

    fn pattern_variant(&self) -> Option<PatternVariant> {
        match self {
            Self::PatternCycle => Some(PatternVariant::Cycle),
            Self::PatternFlip => Some(PatternVariant::Flip),
            Self::PatternPaint => Some(PatternVariant::Paint),
            _ => None,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// Player confirmed leaving with a second Esc.
    Quit,
}

/// Something noteworthy that happened during input or a step.
///
/// Consumed by the app loop for sound effects and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallHit,
    FloorBounce,
    PaddleHit,
    PointScored { by_player: bool },
    TileChanged,
    TileSelected,
    TilesSwapped,
    Solved,
    LevelAdvanced,
    Won,
    Lost,
}

/// Settings a game is started with, gathered from config and menu choices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchOptions {
    pub skin: Skin,
    pub pong_difficulty: PongDifficulty,
    pub pong_target_score: u32,
    pub bounce_radius: i32,
    /// Bounce world size in pixels.
    pub world_width: i32,
    pub world_height: i32,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            skin: Skin::Classic,
            pong_difficulty: PongDifficulty::Novice,
            pong_target_score: crate::core::config::DEFAULT_PONG_TARGET_SCORE,
            bounce_radius: crate::core::config::DEFAULT_BOUNCE_RADIUS,
            world_width: bounce::DEFAULT_WIDTH,
            world_height: bounce::DEFAULT_HEIGHT,
        }
    }
}

/// The game currently being played. Only one can be active at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Bounce(BounceGame),
    Pattern(PatternGame),
    Swap(SwapGame),
    Pong(PongGame),
}

/// Start a fresh session of `kind`.
pub fn start_game<R: Rng>(kind: GameKind, options: &LaunchOptions, rng: &mut R) -> ActiveGame {
    tracing::info!(game = kind.slug(), "starting game");
    match kind {
        GameKind::Bounce => ActiveGame::Bounce(BounceGame::new(
            options.bounce_radius,
            options.world_width,
            options.world_height,
        )),
        GameKind::Swap => ActiveGame::Swap(SwapGame::new(options.skin, rng)),
        GameKind::Pong => ActiveGame::Pong(PongGame::new(
            options.pong_difficulty,
            options.pong_target_score,
        )),
        pattern_kind => {
            let variant = pattern_kind
                .pattern_variant()
                .unwrap_or(PatternVariant::Cycle);
            ActiveGame::Pattern(PatternGame::new(variant))
        }
    }
}

impl ActiveGame {
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Bounce(_) => GameKind::Bounce,
            Self::Pattern(game) => match game.variant {
                PatternVariant::Cycle => GameKind::PatternCycle,
                PatternVariant::Flip => GameKind::PatternFlip,
                PatternVariant::Paint => GameKind::PatternPaint,
            },
            Self::Swap(_) => GameKind::Swap,
            Self::Pong(_) => GameKind::Pong,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Bounce(game) => game.outcome,
            Self::Pattern(game) => game.outcome,
            Self::Swap(game) => game.outcome,
            Self::Pong(game) => game.outcome,
        }
    }

    /// Advance one fixed tick. Turn-based games ignore it.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        match self {
            Self::Bounce(game) => bounce::step_bounce(game),
            Self::Pong(game) => pong::step_pong(game, rng),
            Self::Pattern(_) | Self::Swap(_) => {}
        }
    }

    /// The drawable area changed; only the bounce world follows it.
    pub fn resize(&mut self, world_width: i32, world_height: i32) {
        if let Self::Bounce(game) = self {
            bounce::resize(game, world_width, world_height);
        }
    }

    /// Drain events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        let events = match self {
            Self::Bounce(game) => &mut game.events,
            Self::Pattern(game) => &mut game.events,
            Self::Swap(game) => &mut game.events,
            Self::Pong(game) => &mut game.events,
        };
        std::mem::take(events)
    }
}

/// Two-step Esc handling shared by every game.
///
/// The first press arms `quit_pending`; a second press confirms and sets the
/// outcome to `Quit`.
pub(crate) fn press_quit(quit_pending: &mut bool, outcome: &mut Option<Outcome>) {
    if *quit_pending {
        *outcome = Some(Outcome::Quit);
    } else {
        *quit_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_slugs_round_trip() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(GameKind::from_slug("PONG"), Some(GameKind::Pong));
        assert_eq!(GameKind::from_slug("tetris"), None);
    }

    #[test]
    fn test_from_index_falls_back() {
        assert_eq!(GameKind::from_index(5), GameKind::Pong);
        assert_eq!(GameKind::from_index(99), GameKind::Bounce);
    }

    #[test]
    fn test_start_game_kinds_match() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let options = LaunchOptions::default();
        for kind in GameKind::ALL {
            let game = start_game(kind, &options, &mut rng);
            assert_eq!(game.kind(), kind);
            assert!(game.outcome().is_none());
        }
    }

    #[test]
    fn test_start_game_uses_options() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let options = LaunchOptions {
            skin: Skin::Mono,
            pong_difficulty: PongDifficulty::Master,
            pong_target_score: 3,
            ..LaunchOptions::default()
        };

        match start_game(GameKind::Swap, &options, &mut rng) {
            ActiveGame::Swap(game) => assert_eq!(game.skin, Skin::Mono),
            other => panic!("expected swap, got {:?}", other.kind()),
        }
        match start_game(GameKind::Pong, &options, &mut rng) {
            ActiveGame::Pong(game) => {
                assert_eq!(game.difficulty, PongDifficulty::Master);
                assert_eq!(game.target_score, 3);
            }
            other => panic!("expected pong, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_press_quit_two_step() {
        let mut pending = false;
        let mut outcome = None;
        press_quit(&mut pending, &mut outcome);
        assert!(pending);
        assert!(outcome.is_none());
        press_quit(&mut pending, &mut outcome);
        assert_eq!(outcome, Some(Outcome::Quit));
    }

    #[test]
    fn test_take_events_drains() {
        let mut game = ActiveGame::Bounce(BounceGame::new(100, 640, 480));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // Run until the ball has hit something
        for _ in 0..200 {
            game.step(&mut rng);
        }
        assert!(!game.take_events().is_empty());
        assert!(game.take_events().is_empty());
    }
}
