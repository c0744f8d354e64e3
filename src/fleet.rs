//! Fleet state: sequential roster placement and sunk-ship tracking.

use crate::common::{Coord, PlaceError};
use crate::config::{MAX_SHIP_LENGTH, NUM_SHIPS, ROSTER};
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, Ship, ShipClass};
use crate::stats::GameStatistics;

/// The player's fleet. Ships are placed in roster order and receive
/// identities 1..=NUM_SHIPS as they are committed.
pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
    placed: usize,
}

impl Fleet {
    /// Create a fleet with no ships placed.
    pub fn new() -> Self {
        Fleet {
            ships: [None; NUM_SHIPS],
            placed: 0,
        }
    }

    /// The next roster class to place, or `None` once the fleet is complete.
    pub fn next_class(&self) -> Option<ShipClass> {
        ROSTER.get(self.placed).copied()
    }

    /// True once every roster ship has been placed.
    pub fn is_complete(&self) -> bool {
        self.placed == NUM_SHIPS
    }

    /// Iterator over the placed ships, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Number of ships flagged destroyed so far.
    pub fn destroyed_count(&self) -> usize {
        self.ships().filter(|s| s.is_destroyed()).count()
    }

    /// True when the fleet is complete and every ship is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.is_complete() && self.ships().all(|s| s.is_destroyed())
    }

    /// Place the next roster ship starting at `start` along `orientation`.
    ///
    /// Two passes for atomicity: every derived cell is validated before any
    /// write, so a failed call leaves the grid untouched. Candidate cells
    /// are staged in a fixed buffer.
    ///
    /// Panics if the fleet is already complete.
    pub fn place(
        &mut self,
        grid: &mut Grid,
        start: Coord,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        let class = match self.next_class() {
            Some(class) => class,
            None => panic!("fleet is already complete"),
        };
        let mut staged = [Coord::new(0, 0); MAX_SHIP_LENGTH];
        let mut coord = start;
        for slot in staged.iter_mut().take(class.length()) {
            if !grid.in_bounds(coord.row, coord.col) {
                return Err(PlaceError::OutOfBounds);
            }
            if !grid.is_available(coord.row, coord.col) {
                return Err(PlaceError::PositionOccupied);
            }
            *slot = coord;
            coord = orientation.step(coord);
        }
        for cell in &staged[..class.length()] {
            grid.set_state(cell.row, cell.col, CellState::Ship);
        }
        let id = self.placed + 1;
        self.ships[self.placed] = Some(Ship::new(class, id, start, orientation));
        self.placed += 1;
        Ok(())
    }

    /// Re-scan the fleet for newly destroyed ships after a strike.
    ///
    /// For every ship not yet flagged, its derived cells are recomputed and
    /// the ones in state `Hit` counted; when the count reaches the ship's
    /// length the flag is set and `stats.ships_destroyed` incremented, both
    /// exactly once. Returns the newly sunk names, one slot per roster
    /// position.
    pub fn sweep_destroyed(
        &mut self,
        grid: &Grid,
        stats: &mut GameStatistics,
    ) -> [Option<&'static str>; NUM_SHIPS] {
        let mut sunk = [None; NUM_SHIPS];
        for (i, slot) in self.ships.iter_mut().enumerate() {
            let ship = match slot {
                Some(ship) if !ship.is_destroyed() => ship,
                _ => continue,
            };
            let hit_cells = ship
                .cells()
                .filter(|cell| grid.state(cell.row, cell.col) == CellState::Hit)
                .count();
            if hit_cells == ship.length() {
                ship.mark_destroyed();
                stats.note_ship_destroyed();
                sunk[i] = Some(ship.name());
            }
        }
        sunk
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
