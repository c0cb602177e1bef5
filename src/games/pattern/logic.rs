//! Pattern game logic: tile actions, solve detection, level progression.

use super::types::*;
use crate::core::grid::{grids_match, Cell, MoveDirection, GRID_SIZE};
use crate::games::{press_quit, GameEvent, Outcome};

/// UI-agnostic input actions for the pattern games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternInput {
    Move(MoveDirection),
    /// Space/Enter: press the tile under the cursor, or continue once solved.
    Activate,
    /// Mouse click on a tile.
    Click(Cell),
    /// Choose a brush colour by index (keys 1-4).
    Brush(u8),
    /// Tab: next brush colour.
    NextBrush,
    /// R: restart the level.
    Reset,
    Quit,
    Other,
}

/// Process player input.
pub fn process_input(game: &mut PatternGame, input: PatternInput) {
    if game.outcome.is_some() {
        return;
    }

    if input == PatternInput::Quit {
        press_quit(&mut game.quit_pending, &mut game.outcome);
        return;
    }

    if game.quit_pending {
        game.quit_pending = false;
        return;
    }

    match input {
        PatternInput::Move(direction) => {
            game.cursor = game.cursor.step(direction);
        }
        PatternInput::Activate => {
            if game.solved {
                advance_level(game);
            } else {
                let cursor = game.cursor;
                press_tile(game, cursor);
            }
        }
        PatternInput::Click(cell) => {
            if !cell.is_valid() {
                return;
            }
            game.cursor = cell;
            if game.solved {
                advance_level(game);
            } else {
                press_tile(game, cell);
            }
        }
        PatternInput::Brush(color) => {
            if game.variant == PatternVariant::Paint && color < game.colors() {
                game.brush = color;
            }
        }
        PatternInput::NextBrush => {
            if game.variant == PatternVariant::Paint {
                game.brush = (game.brush + 1) % game.colors();
            }
        }
        PatternInput::Reset => reset_level(game),
        PatternInput::Quit | PatternInput::Other => {}
    }
}

/// Apply the variant's tile action at `cell`.
///
/// Returns false when the action changed nothing (painting a tile its own
/// colour), in which case no move is counted.
pub fn press_tile(game: &mut PatternGame, cell: Cell) -> bool {
    if game.solved || !cell.is_valid() {
        return false;
    }

    let colors = game.colors();
    match game.variant {
        PatternVariant::Cycle => {
            cycle_tile(game, cell, colors);
        }
        PatternVariant::Flip => {
            cycle_tile(game, cell, colors);
            for neighbor in cell.orthogonal_neighbors() {
                cycle_tile(game, neighbor, colors);
            }
        }
        PatternVariant::Paint => {
            if game.grid[cell.row][cell.col] == game.brush {
                return false;
            }
            game.grid[cell.row][cell.col] = game.brush;
        }
    }

    game.moves += 1;
    game.total_moves += 1;
    game.events.push(GameEvent::TileChanged);
    check_solved(game);
    true
}

fn cycle_tile(game: &mut PatternGame, cell: Cell, colors: u8) {
    let tile = &mut game.grid[cell.row][cell.col];
    *tile = (*tile + 1) % colors;
}

/// Update `solved` from a flat comparison against the target.
pub fn check_solved(game: &mut PatternGame) -> bool {
    let was_solved = game.solved;
    game.solved = grids_match(&game.grid, game.target());
    if game.solved && !was_solved {
        tracing::info!(
            variant = game.variant.name(),
            level = game.level().name,
            moves = game.moves,
            "pattern solved"
        );
        game.events.push(GameEvent::Solved);
    }
    game.solved
}

/// Move on from a solved level; finishing the last one wins the session.
pub fn advance_level(game: &mut PatternGame) {
    if !game.solved {
        return;
    }

    if game.is_last_level() {
        game.outcome = Some(Outcome::Won);
        game.events.push(GameEvent::Won);
        return;
    }

    game.level_index += 1;
    reset_level(game);
    game.brush = game.brush.min(game.colors() - 1);
    game.events.push(GameEvent::LevelAdvanced);
}

/// Blank the board and restart the level's move count.
pub fn reset_level(game: &mut PatternGame) {
    game.grid = [[0; GRID_SIZE]; GRID_SIZE];
    game.cursor = Cell::center();
    game.moves = 0;
    game.solved = false;
}
