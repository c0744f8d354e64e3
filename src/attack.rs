//! Strike application: mapping a pattern onto the grid around a center.

use crate::common::{Coord, ShotOutcome};
use crate::config::{NUM_SHIPS, PATTERN_OFFSET, PATTERN_SIZE};
use crate::fleet::Fleet;
use crate::grid::{CellState, Grid};
use crate::pattern::PatternShape;
use crate::stats::GameStatistics;

/// Upper bound on reported cells per strike (the full 5×5 template).
pub const MAX_STRIKE_CELLS: usize = PATTERN_SIZE * PATTERN_SIZE;

/// One in-bounds pattern cell and what happened to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellReport {
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

/// Outcome of one strike: the ordered per-cell results, shot tallies and
/// the names of ships the strike finished off.
#[derive(Debug, Clone)]
pub struct StrikeReport {
    shape: PatternShape,
    center: Coord,
    cells: [Option<CellReport>; MAX_STRIKE_CELLS],
    shots: u32,
    hits: u32,
    sunk: [Option<&'static str>; NUM_SHIPS],
}

impl StrikeReport {
    /// The shape that was fired.
    pub fn shape(&self) -> PatternShape {
        self.shape
    }

    /// The chosen center cell.
    pub fn center(&self) -> Coord {
        self.center
    }

    /// Per-cell outcomes in template row-major order, clipped cells omitted.
    pub fn cells(&self) -> impl Iterator<Item = &CellReport> {
        self.cells.iter().flatten()
    }

    /// Shots attempted at in-bounds cells.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Fresh hits scored by this strike.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Shots that were not fresh hits, repeat shots included.
    pub fn misses(&self) -> u32 {
        self.shots - self.hits
    }

    /// Names of the ships this strike sank.
    pub fn sunk(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sunk.iter().flatten().copied()
    }

    /// This strike's hit rate as a percentage, or `None` if every pattern
    /// cell was clipped off the grid.
    pub fn hit_rate(&self) -> Option<f32> {
        if self.shots == 0 {
            None
        } else {
            Some(self.hits as f32 / self.shots as f32 * 100.0)
        }
    }
}

/// Apply `shape` to the grid centered at `center`.
///
/// Every affected template cell is translated to an absolute coordinate;
/// cells falling off the grid are skipped and not counted. Each in-bounds
/// cell counts one shot: `Ship` becomes `Hit`, `Empty` becomes `HitWater`,
/// terminal cells are left unchanged and reported as already struck. When at
/// least one fresh hit landed, the fleet is re-scanned for newly sunk ships
/// before the statistics roll-up.
pub fn apply_strike(
    grid: &mut Grid,
    shape: PatternShape,
    center: Coord,
    fleet: &mut Fleet,
    stats: &mut GameStatistics,
) -> StrikeReport {
    let mask = shape.mask();
    let mut cells = [None; MAX_STRIKE_CELLS];
    let mut recorded = 0;
    let mut shots = 0u32;
    let mut hits = 0u32;

    for (i, j) in mask.iter_set() {
        let row = center.row as isize - PATTERN_OFFSET as isize + i as isize;
        let col = center.col as isize - PATTERN_OFFSET as isize + j as isize;
        if row < 0 || col < 0 {
            continue;
        }
        let (row, col) = (row as usize, col as usize);
        if !grid.in_bounds(row, col) {
            continue;
        }
        shots += 1;
        let outcome = match grid.state(row, col) {
            CellState::Ship => {
                grid.set_state(row, col, CellState::Hit);
                hits += 1;
                ShotOutcome::Hit
            }
            CellState::Empty => {
                grid.set_state(row, col, CellState::HitWater);
                ShotOutcome::Miss
            }
            CellState::Hit => ShotOutcome::AlreadyHit,
            CellState::HitWater => ShotOutcome::AlreadyWater,
        };
        cells[recorded] = Some(CellReport {
            coord: Coord::new(row, col),
            outcome,
        });
        recorded += 1;
    }

    let sunk = if hits > 0 {
        fleet.sweep_destroyed(grid, stats)
    } else {
        [None; NUM_SHIPS]
    };
    stats.record_strike(shots, hits);

    StrikeReport {
        shape,
        center,
        cells,
        shots,
        hits,
        sunk,
    }
}
