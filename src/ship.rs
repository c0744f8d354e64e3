//! Ship definitions: orientation stepping, roster classes and placed ships.

use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
    ];

    /// The next cell along this orientation. Horizontal steps right,
    /// vertical steps down, diagonal steps down-right.
    #[inline]
    pub fn step(self, coord: Coord) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(coord.row, coord.col + 1),
            Orientation::Vertical => Coord::new(coord.row + 1, coord.col),
            Orientation::Diagonal => Coord::new(coord.row + 1, coord.col + 1),
        }
    }

    /// The input letter for this orientation.
    pub fn letter(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
            Orientation::Diagonal => 'D',
        }
    }
}

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A ship committed to the grid. Its occupied cells are derived by stepping
/// `length` times from `start` along `orientation`; `destroyed` flips to true
/// exactly once, when every derived cell shows `Hit`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    id: usize,
    start: Coord,
    orientation: Orientation,
    destroyed: bool,
}

impl Ship {
    pub(crate) fn new(class: ShipClass, id: usize, start: Coord, orientation: Orientation) -> Self {
        Ship {
            class,
            id,
            start,
            orientation,
            destroyed: false,
        }
    }

    /// Ship's class.
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    /// Ship's length in cells.
    pub fn length(&self) -> usize {
        self.class.length()
    }

    /// Identity assigned in placement order, starting at 1.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Start cell of the ship.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether every cell of this ship has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.destroyed = true;
    }

    /// Iterator over the cells the ship occupies, in stepping order.
    pub fn cells(&self) -> ShipCells {
        ShipCells {
            next: self.start,
            orientation: self.orientation,
            remaining: self.class.length(),
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", id: {}, start: {}, orientation: {:?}, destroyed: {} }}",
            self.class.name(),
            self.id,
            self.start,
            self.orientation,
            self.destroyed,
        )
    }
}

/// Iterator over a ship's occupied cells.
#[derive(Clone, Copy)]
pub struct ShipCells {
    next: Coord,
    orientation: Orientation,
    remaining: usize,
}

impl Iterator for ShipCells {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cell = self.next;
        self.next = self.orientation.step(cell);
        Some(cell)
    }
}
