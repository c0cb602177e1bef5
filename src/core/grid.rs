//! 3x3 tile grids shared by the pattern games and the swap puzzle.

/// Side length of every tile board.
pub const GRID_SIZE: usize = 3;

/// A board of small integers (colour or tile id per cell).
pub type Grid = [[u8; GRID_SIZE]; GRID_SIZE];

/// Flat cell-by-cell equality.
pub fn grids_match(a: &Grid, b: &Grid) -> bool {
    a == b
}

/// Build a grid from a flat row-major slice of exactly nine values.
pub fn grid_from_flat(values: &[u8; GRID_SIZE * GRID_SIZE]) -> Grid {
    let mut grid = [[0; GRID_SIZE]; GRID_SIZE];
    for (i, value) in values.iter().enumerate() {
        grid[i / GRID_SIZE][i % GRID_SIZE] = *value;
    }
    grid
}

/// Flatten a grid into row-major order.
pub fn flatten(grid: &Grid) -> [u8; GRID_SIZE * GRID_SIZE] {
    let mut flat = [0; GRID_SIZE * GRID_SIZE];
    for (row, values) in grid.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            flat[row * GRID_SIZE + col] = *value;
        }
    }
    flat
}

/// Cursor movement on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Centre of the board, where cursors start.
    pub fn center() -> Self {
        Self::new(GRID_SIZE / 2, GRID_SIZE / 2)
    }

    pub fn is_valid(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Move one step, staying on the board.
    pub fn step(self, direction: MoveDirection) -> Self {
        let max = GRID_SIZE - 1;
        match direction {
            MoveDirection::Up => Self::new(self.row.saturating_sub(1), self.col),
            MoveDirection::Down => Self::new((self.row + 1).min(max), self.col),
            MoveDirection::Left => Self::new(self.row, self.col.saturating_sub(1)),
            MoveDirection::Right => Self::new(self.row, (self.col + 1).min(max)),
        }
    }

    /// Orthogonal neighbours that lie on the board.
    pub fn orthogonal_neighbors(self) -> Vec<Cell> {
        let mut neighbors = Vec::with_capacity(4);
        if self.row > 0 {
            neighbors.push(Self::new(self.row - 1, self.col));
        }
        if self.row + 1 < GRID_SIZE {
            neighbors.push(Self::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            neighbors.push(Self::new(self.row, self.col - 1));
        }
        if self.col + 1 < GRID_SIZE {
            neighbors.push(Self::new(self.row, self.col + 1));
        }
        neighbors
    }
}
