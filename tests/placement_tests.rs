use armada::{CellState, Coord, Fleet, Grid, Orientation, PlaceError, ROSTER};

#[test]
fn placement_is_exact_and_minimal() {
    let mut grid = Grid::new();
    let mut fleet = Fleet::new();
    fleet
        .place(&mut grid, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    for col in 0..4 {
        assert_eq!(grid.state(0, col), CellState::Ship);
    }
    let ship_cells = grid
        .cells()
        .filter(|&(_, state)| state == CellState::Ship)
        .count();
    assert_eq!(ship_cells, 4);
}

#[test]
fn overlap_is_rejected_without_mutation() {
    let mut grid = Grid::new();
    let mut fleet = Fleet::new();
    fleet
        .place(&mut grid, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    let snapshot = grid.clone();
    let err = fleet
        .place(&mut grid, Coord::new(0, 2), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, PlaceError::PositionOccupied);
    assert_eq!(grid, snapshot);
    assert_eq!(fleet.ships().count(), 1);
}

#[test]
fn out_of_bounds_is_rejected_before_any_mutation() {
    let mut grid = Grid::new();
    let mut fleet = Fleet::new();
    fleet
        .place(&mut grid, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    fleet
        .place(&mut grid, Coord::new(2, 0), Orientation::Horizontal)
        .unwrap();
    fleet
        .place(&mut grid, Coord::new(4, 0), Orientation::Horizontal)
        .unwrap();
    let snapshot = grid.clone();
    // the Destroyer (length 2) at (9,9) runs off the right edge
    let err = fleet
        .place(&mut grid, Coord::new(9, 9), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, PlaceError::OutOfBounds);
    assert_eq!(grid, snapshot);
}

#[test]
fn partially_off_board_tail_leaves_grid_unchanged() {
    let mut grid = Grid::new();
    let mut fleet = Fleet::new();
    // Battleship vertical from (7,0) would need rows 7..=10
    let err = fleet
        .place(&mut grid, Coord::new(7, 0), Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, PlaceError::OutOfBounds);
    assert!(grid.cells().all(|(_, state)| state == CellState::Empty));
    assert_eq!(fleet.ships().count(), 0);
}

#[test]
fn roster_is_placed_in_order_with_sequential_ids() {
    let mut grid = Grid::new();
    let mut fleet = Fleet::new();
    for &(row, col) in &[(0, 0), (2, 0), (4, 0), (6, 0)] {
        fleet
            .place(&mut grid, Coord::new(row, col), Orientation::Horizontal)
            .unwrap();
    }
    assert!(fleet.is_complete());
    assert!(fleet.next_class().is_none());
    for (i, ship) in fleet.ships().enumerate() {
        assert_eq!(ship.id(), i + 1);
        assert_eq!(ship.name(), ROSTER[i].name());
        assert_eq!(ship.length(), ROSTER[i].length());
    }
}

#[test]
fn diagonal_needs_room_both_ways() {
    let mut grid = Grid::new();
    let mut fleet = Fleet::new();
    let err = fleet
        .place(&mut grid, Coord::new(8, 0), Orientation::Diagonal)
        .unwrap_err();
    assert_eq!(err, PlaceError::OutOfBounds);
    fleet
        .place(&mut grid, Coord::new(6, 6), Orientation::Diagonal)
        .unwrap();
    assert_eq!(grid.state(6, 6), CellState::Ship);
    assert_eq!(grid.state(9, 9), CellState::Ship);
}
