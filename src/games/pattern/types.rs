//! Pattern game data structures.

use super::levels::{levels_for, Level};
use crate::core::grid::{Cell, Grid, GRID_SIZE};
use crate::games::{GameEvent, Outcome};

/// What pressing a tile does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternVariant {
    /// The tile moves to the next colour.
    Cycle,
    /// The tile and its orthogonal neighbours move to the next colour.
    Flip,
    /// The tile takes the brush colour.
    Paint,
}

impl PatternVariant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cycle => "Cycle",
            Self::Flip => "Flip",
            Self::Paint => "Paint",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternGame {
    pub variant: PatternVariant,
    pub outcome: Option<Outcome>,
    pub quit_pending: bool,

    /// Index into `levels_for(variant)`.
    pub level_index: usize,
    pub grid: Grid,
    pub cursor: Cell,
    /// Paint colour (Paint variant only).
    pub brush: u8,
    /// Set when `grid` equals the level target.
    pub solved: bool,

    /// Moves on the current level.
    pub moves: u32,
    /// Moves across all levels this session.
    pub total_moves: u32,

    pub events: Vec<GameEvent>,
}

impl PatternGame {
    pub fn new(variant: PatternVariant) -> Self {
        Self {
            variant,
            outcome: None,
            quit_pending: false,

            level_index: 0,
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            cursor: Cell::center(),
            brush: 1,
            solved: false,

            moves: 0,
            total_moves: 0,

            events: Vec::new(),
        }
    }

    pub fn level_count(&self) -> usize {
        levels_for(self.variant).len()
    }

    pub fn level(&self) -> &'static Level {
        let levels = levels_for(self.variant);
        levels[self.level_index.min(levels.len() - 1)]
    }

    pub fn target(&self) -> &'static Grid {
        &self.level().target
    }

    pub fn colors(&self) -> u8 {
        self.level().colors
    }

    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 >= self.level_count()
    }
}
