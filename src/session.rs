//! The game session: the explicit context object owning grid, fleet and
//! statistics for the lifetime of one game.

use rand::Rng;

use crate::attack::{apply_strike, StrikeReport};
use crate::common::{Coord, PlaceError};
use crate::config::{GRID_SIZE, MAX_RANDOM_ATTEMPTS};
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::pattern::PatternShape;
use crate::ship::{Orientation, ShipClass};
use crate::stats::GameStatistics;

/// One single-player game: a grid, the fleet placed on it and the running
/// statistics. All operations go through this object; there is no global
/// state.
pub struct GameSession {
    grid: Grid,
    fleet: Fleet,
    stats: GameStatistics,
}

impl GameSession {
    /// Create a session with an empty grid and no ships placed.
    pub fn new() -> Self {
        GameSession {
            grid: Grid::new(),
            fleet: Fleet::new(),
            stats: GameStatistics::new(),
        }
    }

    /// The session's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The session's fleet.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// The running statistics.
    pub fn stats(&self) -> &GameStatistics {
        &self.stats
    }

    /// The next roster ship awaiting placement, if any.
    pub fn next_ship(&self) -> Option<ShipClass> {
        self.fleet.next_class()
    }

    /// Place the next roster ship. See [`Fleet::place`].
    pub fn place_next_ship(
        &mut self,
        start: Coord,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        self.fleet.place(&mut self.grid, start, orientation)
    }

    /// Fire `shape` centered at `center` and return the strike report.
    pub fn strike(&mut self, shape: PatternShape, center: Coord) -> StrikeReport {
        apply_strike(&mut self.grid, shape, center, &mut self.fleet, &mut self.stats)
    }

    /// Draw a random valid start and orientation for the next roster ship.
    ///
    /// The orientation is uniform over H/V/D, the start bounds-aware for the
    /// ship's length, and every cell is availability-checked; up to
    /// `MAX_RANDOM_ATTEMPTS` candidates are tried before giving up. Returns
    /// `None` when the fleet is complete or no free spot was found.
    pub fn random_placement<R: Rng>(&self, rng: &mut R) -> Option<(Coord, Orientation)> {
        let class = self.fleet.next_class()?;
        let len = class.length();
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let orientation = Orientation::ALL[rng.random_range(0..Orientation::ALL.len())];
            let max_row = match orientation {
                Orientation::Horizontal => GRID_SIZE - 1,
                Orientation::Vertical | Orientation::Diagonal => GRID_SIZE - len,
            };
            let max_col = match orientation {
                Orientation::Vertical => GRID_SIZE - 1,
                Orientation::Horizontal | Orientation::Diagonal => GRID_SIZE - len,
            };
            let start = Coord::new(rng.random_range(0..=max_row), rng.random_range(0..=max_col));
            let mut coord = start;
            let mut free = true;
            for _ in 0..len {
                if !self.grid.is_available(coord.row, coord.col) {
                    free = false;
                    break;
                }
                coord = orientation.step(coord);
            }
            if free {
                return Some((start, orientation));
            }
        }
        None
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
