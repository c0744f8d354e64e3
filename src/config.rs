use crate::ship::ShipClass;

pub const GRID_SIZE: usize = 10;
pub const PATTERN_SIZE: usize = 5;
pub const PATTERN_OFFSET: usize = PATTERN_SIZE / 2;
pub const NUM_SHIPS: usize = 4;
pub const MAX_SHIP_LENGTH: usize = 4;
pub const ROSTER: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser 1", 3),
    ShipClass::new("Cruiser 2", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total number of ship cells in the standard roster.
pub const TOTAL_FLEET_CELLS: usize = ROSTER[0].length()
    + ROSTER[1].length()
    + ROSTER[2].length()
    + ROSTER[3].length();

/// Interactive placement attempts allowed per ship.
pub const MAX_PLACE_ATTEMPTS: usize = 5;
/// Candidate draws before random placement gives up.
pub const MAX_RANDOM_ATTEMPTS: usize = 100;
