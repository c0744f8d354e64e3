#![cfg(feature = "std")]
//! Coordinate and orientation parsing plus the interactive prompt loops.
//! Invalid input never reaches the core: everything is validated here, and
//! the bounded placement-retry policy lives here too.

use std::io::{self, Write};

use anyhow::bail;
use log::debug;
use rand::rngs::SmallRng;

use crate::common::{Coord, PlaceError};
use crate::config::{GRID_SIZE, MAX_PLACE_ATTEMPTS};
use crate::pattern::PatternShape;
use crate::render;
use crate::session::GameSession;
use crate::ship::Orientation;

/// Parse a column-letter + row coordinate such as `A5` or `j9`.
/// The letter is case-insensitive; the row must be a digit 0-9 and the
/// whole input must be consumed.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !('A'..='J').contains(&col_ch) {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row >= GRID_SIZE {
        return None;
    }
    Some(Coord::new(row, col))
}

/// Parse a single orientation letter, one of H/V/D, case-insensitive.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    let mut chars = input.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    match letter {
        'H' => Some(Orientation::Horizontal),
        'V' => Some(Orientation::Vertical),
        'D' => Some(Orientation::Diagonal),
        _ => None,
    }
}

fn read_trimmed(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Interactive placement phase: each roster ship gets up to
/// `MAX_PLACE_ATTEMPTS` tries; an empty input line places it randomly.
/// Aborts with an error once a ship's attempts are exhausted.
pub fn place_fleet(session: &mut GameSession, rng: &mut SmallRng) -> anyhow::Result<()> {
    println!("\nPlace your ships (e.g. A5 H). Press enter for random placement.");
    while let Some(class) = session.next_ship() {
        render::print_board(session.grid(), true);
        let mut placed = false;
        for attempt in 1..=MAX_PLACE_ATTEMPTS {
            let prompt = format!(
                "[{}/{}] Place {} (length {}): ",
                attempt,
                MAX_PLACE_ATTEMPTS,
                class.name(),
                class.length()
            );
            let line = read_trimmed(&prompt)?;
            if line.is_empty() {
                let (start, orientation) = match session.random_placement(rng) {
                    Some(candidate) => candidate,
                    None => bail!("no free spot found for {}", class.name()),
                };
                if let Err(e) = session.place_next_ship(start, orientation) {
                    bail!("random placement failed: {}", e);
                }
                debug!("randomly placed {} at {}", class.name(), start);
                println!("{} placed at {} ({}).", class.name(), start, orientation.letter());
                placed = true;
                break;
            }
            let mut parts = line.split_whitespace();
            let start = parts.next().and_then(parse_coord);
            let orientation = parts.next().and_then(parse_orientation);
            let (start, orientation) = match (start, orientation, parts.next()) {
                (Some(start), Some(orientation), None) => (start, orientation),
                _ => {
                    println!("Invalid input. Use <coord> <H|V|D>, e.g. A5 H.");
                    continue;
                }
            };
            match session.place_next_ship(start, orientation) {
                Ok(()) => {
                    debug!("placed {} at {}", class.name(), start);
                    println!("{} placed at {} ({}).", class.name(), start, orientation.letter());
                    placed = true;
                    break;
                }
                Err(PlaceError::OutOfBounds) => {
                    println!("The ship runs off the board there.");
                    println!(
                        "Hint: mind the orientation and the ship length ({} cells).",
                        class.length()
                    );
                }
                Err(PlaceError::PositionOccupied) => {
                    println!("Another ship is blocking that spot.");
                    println!("Hint: pick a free area of the board.");
                }
            }
        }
        if !placed {
            bail!(
                "could not place {} after {} attempts",
                class.name(),
                MAX_PLACE_ATTEMPTS
            );
        }
    }
    println!("\nAll ships are in position!");
    Ok(())
}

/// Prompt for a strike center until a valid coordinate is entered. Pattern
/// cells clip silently, so any on-board center is acceptable.
pub fn prompt_strike_center(shape: PatternShape) -> anyhow::Result<Coord> {
    println!("\nChoose where to center the {} strike:", shape.name());
    loop {
        let line = read_trimmed("Center coordinate (e.g. A5): ")?;
        match parse_coord(&line) {
            Some(center) => {
                debug!("strike center {} for {}", center, shape.name());
                return Ok(center);
            }
            None => println!("Invalid coordinate. Use a column letter A-J and a row 0-9."),
        }
    }
}
