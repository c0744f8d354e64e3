use armada::{CellState, Coord, Grid, GRID_SIZE};

#[test]
fn starts_empty() {
    let grid = Grid::new();
    assert_eq!(grid.cells().count(), GRID_SIZE * GRID_SIZE);
    assert!(grid.cells().all(|(_, state)| state == CellState::Empty));
}

#[test]
fn bounds_checks() {
    let grid = Grid::new();
    assert!(grid.in_bounds(0, 0));
    assert!(grid.in_bounds(9, 9));
    assert!(!grid.in_bounds(10, 0));
    assert!(!grid.in_bounds(0, 10));
}

#[test]
fn availability_follows_state() {
    let mut grid = Grid::new();
    assert!(grid.is_available(3, 4));
    grid.set_state(3, 4, CellState::Ship);
    assert!(!grid.is_available(3, 4));
    assert_eq!(grid.state(3, 4), CellState::Ship);
    // out-of-bounds cells are never available
    assert!(!grid.is_available(10, 0));
}

#[test]
fn cells_iterate_row_major() {
    let grid = Grid::new();
    let first: Vec<Coord> = grid.cells().map(|(coord, _)| coord).take(3).collect();
    assert_eq!(
        first,
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
    );
}
