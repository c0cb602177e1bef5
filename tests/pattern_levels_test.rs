//! Integration test: pattern game levels
//!
//! Plays every level of every variant to the end and checks that each Flip
//! target can actually be reached from a blank board.

use arcade::core::grid::{Cell, GRID_SIZE};
use arcade::games::pattern::{
    levels_for, press_tile, process_input, PatternGame, PatternInput, PatternVariant,
};
use arcade::games::{GameEvent, Outcome};

fn all_cells() -> Vec<Cell> {
    (0..GRID_SIZE * GRID_SIZE)
        .map(|i| Cell::new(i / GRID_SIZE, i % GRID_SIZE))
        .collect()
}

/// Put `game` on `level_index` with a blank board.
fn game_at_level(variant: PatternVariant, level_index: usize) -> PatternGame {
    let mut game = PatternGame::new(variant);
    game.level_index = level_index;
    game
}

/// Press tiles directly to reach the current target.
fn solve_current_level(game: &mut PatternGame) {
    let target = *game.target();
    for cell in all_cells() {
        let wanted = target[cell.row][cell.col];
        match game.variant {
            PatternVariant::Cycle => {
                for _ in 0..wanted {
                    process_input(game, PatternInput::Click(cell));
                }
            }
            PatternVariant::Paint => {
                if wanted != 0 {
                    process_input(game, PatternInput::Brush(wanted));
                    process_input(game, PatternInput::Click(cell));
                }
            }
            PatternVariant::Flip => unreachable!("flip levels are solved by search"),
        }
    }
}

// =============================================================================
// Full Playthroughs
// =============================================================================

#[test]
fn test_cycle_playthrough_wins() {
    let mut game = PatternGame::new(PatternVariant::Cycle);
    let level_count = game.level_count();

    for level in 0..level_count {
        assert_eq!(game.level_index, level);
        solve_current_level(&mut game);
        assert!(game.solved, "level {} not solved", game.level().name);
        process_input(&mut game, PatternInput::Activate);
    }

    assert_eq!(game.outcome, Some(Outcome::Won));
    assert!(game.events.contains(&GameEvent::Won));
    assert!(game.total_moves > 0);
}

#[test]
fn test_paint_playthrough_wins() {
    let mut game = PatternGame::new(PatternVariant::Paint);
    let level_count = game.level_count();

    for _ in 0..level_count {
        solve_current_level(&mut game);
        assert!(game.solved, "level {} not solved", game.level().name);
        process_input(&mut game, PatternInput::Activate);
    }

    assert_eq!(game.outcome, Some(Outcome::Won));
}

#[test]
fn test_input_ignored_after_win() {
    let mut game = PatternGame::new(PatternVariant::Cycle);
    for _ in 0..game.level_count() {
        solve_current_level(&mut game);
        process_input(&mut game, PatternInput::Activate);
    }
    let grid = game.grid;
    process_input(&mut game, PatternInput::Click(Cell::new(0, 0)));
    assert_eq!(game.grid, grid);
}

// =============================================================================
// Flip Reachability
// =============================================================================

#[test]
fn test_every_flip_level_is_reachable() {
    let cells = all_cells();

    for (index, level) in levels_for(PatternVariant::Flip).iter().enumerate() {
        // Two colours: each tile only needs to be pressed zero or one times
        let solvable = (0u32..1 << cells.len()).any(|mask| {
            let mut game = game_at_level(PatternVariant::Flip, index);
            for (bit, cell) in cells.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    press_tile(&mut game, *cell);
                }
            }
            game.solved
        });
        assert!(solvable, "flip level {} has no solution", level.name);
    }
}

#[test]
fn test_flip_press_order_does_not_matter() {
    let presses = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 1)];

    let mut forward = game_at_level(PatternVariant::Flip, 0);
    for cell in presses {
        press_tile(&mut forward, cell);
    }
    let mut backward = game_at_level(PatternVariant::Flip, 0);
    for cell in presses.iter().rev() {
        press_tile(&mut backward, *cell);
    }

    assert_eq!(forward.grid, backward.grid);
}

// =============================================================================
// Reset and Quit
// =============================================================================

#[test]
fn test_reset_mid_level_keeps_total_moves() {
    let mut game = PatternGame::new(PatternVariant::Cycle);
    process_input(&mut game, PatternInput::Activate);
    process_input(&mut game, PatternInput::Activate);
    process_input(&mut game, PatternInput::Reset);

    assert_eq!(game.moves, 0);
    assert_eq!(game.total_moves, 2);
    assert_eq!(game.grid, [[0; GRID_SIZE]; GRID_SIZE]);
}

#[test]
fn test_quit_prompt_cancelled_by_other_key() {
    let mut game = PatternGame::new(PatternVariant::Paint);
    process_input(&mut game, PatternInput::Quit);
    assert!(game.quit_pending);

    // The cancelling key is swallowed
    process_input(&mut game, PatternInput::Activate);
    assert!(!game.quit_pending);
    assert_eq!(game.moves, 0);
    assert!(game.outcome.is_none());
}
