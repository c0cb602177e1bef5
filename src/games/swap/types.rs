//! Tile-swap puzzle data structures.

use crate::core::grid::{flatten, grid_from_flat, grids_match, Cell, Grid, GRID_SIZE};
use crate::games::{GameEvent, Outcome};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The ordered board the player is working towards.
pub const SOLUTION: Grid = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// Visual themes for the puzzle. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skin {
    /// Numbered tiles.
    Classic,
    /// Saturated colour blocks.
    Neon,
    /// Soft colours with symbols.
    Pastel,
    /// Monochrome letters.
    Mono,
}

impl Skin {
    pub const ALL: [Skin; 4] = [Skin::Classic, Skin::Neon, Skin::Pastel, Skin::Mono];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Neon => "Neon",
            Self::Pastel => "Pastel",
            Self::Mono => "Mono",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct SwapGame {
    pub outcome: Option<Outcome>,
    pub quit_pending: bool,
    pub skin: Skin,

    pub solution: Grid,
    pub grid: Grid,
    pub cursor: Cell,
    /// First tile of a pending swap.
    pub selected: Option<Cell>,
    pub solved: bool,

    /// Swaps made on the current puzzle.
    pub moves: u32,
    /// Puzzles completed this session.
    pub puzzles_solved: u32,

    pub events: Vec<GameEvent>,
}

impl SwapGame {
    pub fn new<R: Rng>(skin: Skin, rng: &mut R) -> Self {
        Self::with_solution(SOLUTION, skin, rng)
    }

    pub fn with_solution<R: Rng>(solution: Grid, skin: Skin, rng: &mut R) -> Self {
        Self {
            outcome: None,
            quit_pending: false,
            skin,

            solution,
            grid: shuffled_board(&solution, rng),
            cursor: Cell::center(),
            selected: None,
            solved: false,

            moves: 0,
            puzzles_solved: 0,

            events: Vec::new(),
        }
    }
}

/// Shuffle `solution` until the result differs from it.
///
/// A board made of a single repeated tile can never differ, so it is
/// returned unchanged.
pub fn shuffled_board<R: Rng>(solution: &Grid, rng: &mut R) -> Grid {
    let mut tiles = flatten(solution);
    if tiles.iter().all(|t| *t == tiles[0]) {
        return *solution;
    }

    loop {
        tiles.shuffle(rng);
        let board = grid_from_flat(&tiles);
        if !grids_match(&board, solution) {
            return board;
        }
    }
}

/// Number of tiles sitting in their solved position.
pub fn tiles_in_place(grid: &Grid, solution: &Grid) -> usize {
    (0..GRID_SIZE * GRID_SIZE)
        .filter(|i| grid[i / GRID_SIZE][i % GRID_SIZE] == solution[i / GRID_SIZE][i % GRID_SIZE])
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_is_shuffled() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let game = SwapGame::new(Skin::Classic, &mut rng);
        assert_ne!(game.grid, SOLUTION);
        assert!(!game.solved);
        assert_eq!(game.moves, 0);
        assert!(game.selected.is_none());
    }

    #[test]
    fn test_shuffle_keeps_tiles() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let board = shuffled_board(&SOLUTION, &mut rng);
            let mut tiles = flatten(&board);
            tiles.sort_unstable();
            assert_eq!(tiles, flatten(&SOLUTION));
        }
    }

    #[test]
    fn test_uniform_board_returned_unchanged() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let uniform = [[4; 3]; 3];
        assert_eq!(shuffled_board(&uniform, &mut rng), uniform);
    }

    #[test]
    fn test_shuffle_with_duplicate_colors_still_differs() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let stripes = [[0, 0, 0], [1, 1, 1], [0, 0, 0]];
        for _ in 0..50 {
            assert_ne!(shuffled_board(&stripes, &mut rng), stripes);
        }
    }

    #[test]
    fn test_tiles_in_place() {
        assert_eq!(tiles_in_place(&SOLUTION, &SOLUTION), 9);
        let mut grid = SOLUTION;
        grid[0][0] = 1;
        grid[0][1] = 0;
        assert_eq!(tiles_in_place(&grid, &SOLUTION), 7);
    }

    #[test]
    fn test_skin_cycle() {
        assert_eq!(Skin::Classic.next(), Skin::Neon);
        assert_eq!(Skin::Mono.next(), Skin::Classic);
        assert_eq!(Skin::Classic.prev(), Skin::Mono);
        for skin in Skin::ALL {
            assert_eq!(skin.next().prev(), skin);
        }
    }
}
