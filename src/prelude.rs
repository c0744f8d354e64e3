//! Commonly used types and utilities for ease of import.

pub use crate::{
    CellState, Coord, Fleet, GameSession, GameStatistics, Grid, Orientation, PatternShape,
    PlaceError, Ship, ShipClass, ShotOutcome, StrikeReport,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, parse_coord, parse_orientation};
