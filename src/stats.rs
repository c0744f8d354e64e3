//! Aggregate game statistics.

/// Monotonically non-decreasing counters, updated only after each strike
/// application via the crate-internal recording methods.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameStatistics {
    ships_destroyed: u32,
    total_shots: u32,
    hits: u32,
    misses: u32,
}

impl GameStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ships_destroyed(&self) -> u32 {
        self.ships_destroyed
    }

    pub fn total_shots(&self) -> u32 {
        self.total_shots
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Overall hit rate as a percentage, or `None` before any shot.
    pub fn hit_rate(&self) -> Option<f32> {
        if self.total_shots == 0 {
            None
        } else {
            Some(self.hits as f32 / self.total_shots as f32 * 100.0)
        }
    }

    /// Roll one strike into the totals. Every shot that is not a fresh hit
    /// lands in `misses`, including repeat shots on already-struck cells.
    pub(crate) fn record_strike(&mut self, shots: u32, hits: u32) {
        self.total_shots += shots;
        self.hits += hits;
        self.misses += shots - hits;
    }

    pub(crate) fn note_ship_destroyed(&mut self) {
        self.ships_destroyed += 1;
    }
}
