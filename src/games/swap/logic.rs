//! Tile-swap logic: selection, swapping, solve detection, reshuffling.

use super::types::*;
use crate::core::grid::{grids_match, Cell, MoveDirection};
use crate::games::{press_quit, GameEvent};
use rand::Rng;

/// UI-agnostic input actions for the swap puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapInput {
    Move(MoveDirection),
    /// Space: select the tile under the cursor.
    Select,
    /// Enter: select, or deal the next puzzle once solved.
    Confirm,
    /// Mouse click on a tile.
    Click(Cell),
    /// K: next skin.
    NextSkin,
    /// N: reshuffle (or start the next puzzle once solved).
    NewPuzzle,
    Quit,
    Other,
}

/// Process player input.
pub fn process_input<R: Rng>(game: &mut SwapGame, input: SwapInput, rng: &mut R) {
    if game.outcome.is_some() {
        return;
    }

    if input == SwapInput::Quit {
        press_quit(&mut game.quit_pending, &mut game.outcome);
        return;
    }

    if game.quit_pending {
        game.quit_pending = false;
        return;
    }

    match input {
        SwapInput::Move(direction) => {
            if !game.solved {
                game.cursor = game.cursor.step(direction);
            }
        }
        SwapInput::Confirm if game.solved => new_puzzle(game, rng),
        SwapInput::Select | SwapInput::Confirm => {
            let cursor = game.cursor;
            select_tile(game, cursor);
        }
        SwapInput::Click(cell) => {
            if cell.is_valid() && !game.solved {
                game.cursor = cell;
                select_tile(game, cell);
            }
        }
        SwapInput::NextSkin => {
            game.skin = game.skin.next();
        }
        SwapInput::NewPuzzle => new_puzzle(game, rng),
        SwapInput::Quit | SwapInput::Other => {}
    }
}

/// Select `cell`: mark it, unmark it, or swap it with the marked tile.
pub fn select_tile(game: &mut SwapGame, cell: Cell) {
    if game.solved || !cell.is_valid() {
        return;
    }

    match game.selected {
        None => {
            game.selected = Some(cell);
            game.events.push(GameEvent::TileSelected);
        }
        Some(first) if first == cell => {
            game.selected = None;
        }
        Some(first) => {
            swap_tiles(game, first, cell);
            game.selected = None;
        }
    }
}

/// Exchange two tiles and count the move.
pub fn swap_tiles(game: &mut SwapGame, a: Cell, b: Cell) {
    let tile_a = game.grid[a.row][a.col];
    game.grid[a.row][a.col] = game.grid[b.row][b.col];
    game.grid[b.row][b.col] = tile_a;

    game.moves += 1;
    game.events.push(GameEvent::TilesSwapped);
    check_solved(game);
}

/// Update `solved` from a flat comparison against the solution.
pub fn check_solved(game: &mut SwapGame) -> bool {
    let was_solved = game.solved;
    game.solved = grids_match(&game.grid, &game.solution);
    if game.solved && !was_solved {
        game.puzzles_solved += 1;
        tracing::info!(moves = game.moves, skin = game.skin.name(), "swap puzzle solved");
        game.events.push(GameEvent::Solved);
    }
    game.solved
}

/// Deal a freshly shuffled board.
pub fn new_puzzle<R: Rng>(game: &mut SwapGame, rng: &mut R) {
    game.grid = shuffled_board(&game.solution, rng);
    game.selected = None;
    game.solved = false;
    game.moves = 0;
    game.cursor = Cell::center();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn game() -> (SwapGame, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let game = SwapGame::new(Skin::Classic, &mut rng);
        (game, rng)
    }

    #[test]
    fn test_select_then_deselect() {
        let (mut game, mut rng) = game();
        process_input(&mut game, SwapInput::Select, &mut rng);
        assert_eq!(game.selected, Some(Cell::center()));
        process_input(&mut game, SwapInput::Select, &mut rng);
        assert!(game.selected.is_none());
        assert_eq!(game.moves, 0);
    }

    #[test]
    fn test_second_selection_swaps() {
        let (mut game, mut rng) = game();
        let before = game.grid;
        process_input(&mut game, SwapInput::Click(Cell::new(0, 0)), &mut rng);
        process_input(&mut game, SwapInput::Click(Cell::new(2, 2)), &mut rng);

        assert_eq!(game.grid[0][0], before[2][2]);
        assert_eq!(game.grid[2][2], before[0][0]);
        assert_eq!(game.moves, 1);
        assert!(game.selected.is_none());
    }

    #[test]
    fn test_last_swap_solves() {
        let (mut game, _) = game();
        game.grid = SOLUTION;
        game.grid[1][0] = SOLUTION[2][1];
        game.grid[2][1] = SOLUTION[1][0];

        select_tile(&mut game, Cell::new(1, 0));
        select_tile(&mut game, Cell::new(2, 1));

        assert!(game.solved);
        assert_eq!(game.puzzles_solved, 1);
        assert!(game.events.contains(&GameEvent::Solved));
    }

    #[test]
    fn test_solved_board_locks_swaps() {
        let (mut game, mut rng) = game();
        game.grid = SOLUTION;
        check_solved(&mut game);

        process_input(&mut game, SwapInput::Click(Cell::new(0, 0)), &mut rng);
        assert!(game.selected.is_none());
        assert_eq!(game.grid, SOLUTION);
    }

    #[test]
    fn test_confirm_after_solve_deals_new_puzzle() {
        let (mut game, mut rng) = game();
        game.grid = SOLUTION;
        game.moves = 4;
        check_solved(&mut game);

        process_input(&mut game, SwapInput::Confirm, &mut rng);
        assert!(!game.solved);
        assert_ne!(game.grid, SOLUTION);
        assert_eq!(game.moves, 0);
        assert_eq!(game.puzzles_solved, 1);
    }

    #[test]
    fn test_solved_board_ignores_cursor_and_select() {
        let (mut game, mut rng) = game();
        game.grid = SOLUTION;
        check_solved(&mut game);

        process_input(&mut game, SwapInput::Move(MoveDirection::Up), &mut rng);
        process_input(&mut game, SwapInput::Select, &mut rng);

        assert_eq!(game.cursor, Cell::center());
        assert!(game.solved);
        assert!(game.selected.is_none());
        assert_eq!(game.grid, SOLUTION);

        // Skin still changes
        process_input(&mut game, SwapInput::NextSkin, &mut rng);
        assert_eq!(game.skin, Skin::Neon);
    }

    #[test]
    fn test_confirm_selects_while_unsolved() {
        let (mut game, mut rng) = game();
        process_input(&mut game, SwapInput::Confirm, &mut rng);
        assert_eq!(game.selected, Some(Cell::center()));
    }

    #[test]
    fn test_skin_cycles_during_play() {
        let (mut game, mut rng) = game();
        process_input(&mut game, SwapInput::NextSkin, &mut rng);
        assert_eq!(game.skin, Skin::Neon);
    }

    #[test]
    fn test_cursor_moves() {
        let (mut game, mut rng) = game();
        process_input(&mut game, SwapInput::Move(MoveDirection::Up), &mut rng);
        process_input(&mut game, SwapInput::Move(MoveDirection::Left), &mut rng);
        assert_eq!(game.cursor, Cell::new(0, 0));
    }

    #[test]
    fn test_quit_flow() {
        let (mut game, mut rng) = game();
        process_input(&mut game, SwapInput::Quit, &mut rng);
        assert!(game.quit_pending);
        process_input(&mut game, SwapInput::Quit, &mut rng);
        assert_eq!(game.outcome, Some(crate::games::Outcome::Quit));
    }
}
