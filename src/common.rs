//! Common types shared across the crate: coordinates, placement errors and
//! per-shot outcomes.

use core::fmt;

/// A cell position on the grid: zero-based row and column.
///
/// The same type doubles as a local offset into the 5×5 attack pattern once
/// translated around the pattern center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    /// Column letter followed by the row number: row 4, column 1 prints `B4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", letter, self.row)
    }
}

/// Errors returned by ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Some cell of the ship would fall outside the grid.
    OutOfBounds,
    /// Some cell of the ship is already occupied by another ship.
    PositionOccupied,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlaceError::PositionOccupied => {
                write!(f, "ship placement overlaps an occupied position")
            }
        }
    }
}

/// Outcome of a single in-bounds pattern cell during a strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell held an intact ship segment; it is now hit.
    Hit,
    /// The cell was open water; it is now struck water.
    Miss,
    /// The cell was already a hit ship segment; no state change.
    AlreadyHit,
    /// The cell was already struck water; no state change.
    AlreadyWater,
}

impl ShotOutcome {
    /// Whether this outcome counts as a fresh hit.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}
