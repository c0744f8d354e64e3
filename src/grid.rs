//! The 10×10 grid of cell states.

use core::fmt;

use crate::common::Coord;
use crate::config::GRID_SIZE;

/// State of one grid cell. `Hit` and `HitWater` are terminal: the only legal
/// transitions are `Empty→Ship` (placement), `Ship→Hit` and `Empty→HitWater`
/// (strike application).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    HitWater,
}

impl CellState {
    /// One-character display symbol.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => 'S',
            CellState::Hit => 'X',
            CellState::HitWater => 'o',
        }
    }
}

/// The game grid: exactly `GRID_SIZE × GRID_SIZE` cells, all `Empty` at
/// construction. Only ship placement and strike application write into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create a grid with every cell `Empty`.
    pub fn new() -> Self {
        Grid {
            cells: [[CellState::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// True iff (row, col) lies on the grid.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    /// True iff (row, col) is in bounds and still `Empty`.
    #[inline]
    pub fn is_available(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cells[row][col] == CellState::Empty
    }

    /// Cell state at (row, col). Panics if the index is out of range;
    /// callers bounds-check first.
    #[inline]
    pub fn state(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    /// Unconditional write at (row, col). Panics if the index is out of
    /// range; callers bounds-check first.
    #[inline]
    pub fn set_state(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    /// Row-major iterator over every cell with its coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &state)| (Coord::new(r, c), state))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                write!(f, "{} ", self.cells[r][c].symbol())?;
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
