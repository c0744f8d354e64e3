#![cfg(feature = "std")]
//! Console rendering: banners, the framed board, pattern previews, strike
//! reports and the statistics summary. Pure output; no core state lives here.

use crate::attack::StrikeReport;
use crate::common::ShotOutcome;
use crate::config::{GRID_SIZE, NUM_SHIPS, PATTERN_SIZE};
use crate::fleet::Fleet;
use crate::grid::{CellState, Grid};
use crate::pattern::PatternShape;
use crate::stats::GameStatistics;

const BANNER_WIDTH: usize = 44;

/// Print a boxed banner line.
pub fn banner(title: &str) {
    println!();
    println!("╔{}╗", "═".repeat(BANNER_WIDTH));
    println!("║{:^width$}║", title, width = BANNER_WIDTH);
    println!("╚{}╝", "═".repeat(BANNER_WIDTH));
}

pub fn print_instructions() {
    println!("Welcome to manual fleet placement!");
    println!("Instructions:");
    println!("  - Coordinates are letter+row (e.g. A5, B3, J9)");
    println!("  - Columns: A to J  |  Rows: 0 to 9");
    println!("  - Orientations: H (horizontal), V (vertical), D (diagonal)");
}

/// Print the framed board. With `reveal` false, intact ship cells render as
/// open water; hits and struck water always show.
pub fn print_board(grid: &Grid, reveal: bool) {
    banner("NAVAL BATTLE BOARD");
    print!("    ");
    for col in 0..GRID_SIZE {
        print!(" {} ", (b'A' + col as u8) as char);
    }
    println!();
    println!("   ┌{}┐", "───".repeat(GRID_SIZE));
    for row in 0..GRID_SIZE {
        print!(" {} │", row);
        for col in 0..GRID_SIZE {
            let state = grid.state(row, col);
            let symbol = if state == CellState::Ship && !reveal {
                CellState::Empty.symbol()
            } else {
                state.symbol()
            };
            print!(" {} ", symbol);
        }
        println!("│");
    }
    println!("   └{}┘", "───".repeat(GRID_SIZE));
    println!();
    println!("Legend:");
    println!("  . = water           S = ship");
    println!("  o = struck water    X = hit ship");
    println!("  Columns: A-J  |  Rows: 0-9");
}

/// List every placed ship with its occupied cells and the overall total.
pub fn print_fleet(fleet: &Fleet) {
    banner("FLEET COORDINATES");
    let mut total = 0;
    for ship in fleet.ships() {
        print!("{}. {} ({}):", ship.id(), ship.name(), ship.orientation().letter());
        for cell in ship.cells() {
            print!(" {}", cell);
            total += 1;
        }
        println!();
    }
    println!();
    println!("Total cells occupied by ships: {}", total);
}

/// Render a 5×5 template with local indices.
pub fn print_pattern(shape: PatternShape) {
    banner(&format!("PATTERN: {}", shape.name()));
    let mask = shape.mask();
    print!("   ");
    for col in 0..PATTERN_SIZE {
        print!(" {} ", col);
    }
    println!();
    for row in 0..PATTERN_SIZE {
        print!(" {}:", row);
        for col in 0..PATTERN_SIZE {
            let affected = mask.get(row, col).unwrap_or(false);
            print!(" {} ", if affected { '●' } else { '·' });
        }
        println!();
    }
    println!();
    println!("● = affected, · = not affected");
}

/// Render one strike report: per-cell outcomes, tallies and sunk ships.
pub fn print_strike_report(report: &StrikeReport) {
    banner(&format!("STRIKE: {}", report.shape().name()));
    println!("Center of attack: {}", report.center());
    println!("Cells struck:");
    for cell in report.cells() {
        let label = match cell.outcome {
            ShotOutcome::Hit => "HIT! Ship struck",
            ShotOutcome::Miss => "miss, open water",
            ShotOutcome::AlreadyHit => "already hit",
            ShotOutcome::AlreadyWater => "water already struck",
        };
        println!("  [{}] -> {}", cell.coord, label);
    }
    println!();
    println!("Result of this strike:");
    println!("  Shots fired: {}", report.shots());
    println!("  Hits: {}", report.hits());
    println!("  Misses: {}", report.misses());
    if report.hits() > 0 {
        if let Some(rate) = report.hit_rate() {
            println!("  Hit rate: {:.1}%", rate);
        }
    }
    for name in report.sunk() {
        println!("  {} destroyed!", name);
    }
}

/// Render the cumulative statistics block.
pub fn print_final_stats(stats: &GameStatistics) {
    banner("FINAL STATISTICS");
    println!("Total shots fired: {}", stats.total_shots());
    println!("Total hits: {}", stats.hits());
    println!("Total misses: {}", stats.misses());
    if let Some(rate) = stats.hit_rate() {
        println!("Overall hit rate: {:.1}%", rate);
    }
    println!("Ships destroyed: {} of {}", stats.ships_destroyed(), NUM_SHIPS);
}
