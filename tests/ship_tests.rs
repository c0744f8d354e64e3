use armada::{Coord, Fleet, Grid, Orientation};

#[test]
fn test_orientation_stepping() {
    let coord = Coord::new(2, 3);
    assert_eq!(Orientation::Horizontal.step(coord), Coord::new(2, 4));
    assert_eq!(Orientation::Vertical.step(coord), Coord::new(3, 3));
    assert_eq!(Orientation::Diagonal.step(coord), Coord::new(3, 4));
}

#[test]
fn test_cells_follow_orientation() {
    let mut grid = Grid::new();
    let mut fleet = Fleet::new();
    fleet
        .place(&mut grid, Coord::new(1, 1), Orientation::Diagonal)
        .unwrap();
    let ship = fleet.ships().next().unwrap();
    let cells: Vec<Coord> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coord::new(1, 1),
            Coord::new(2, 2),
            Coord::new(3, 3),
            Coord::new(4, 4)
        ]
    );
    assert_eq!(ship.name(), "Battleship");
    assert_eq!(ship.length(), 4);
    assert_eq!(ship.id(), 1);
    assert!(!ship.is_destroyed());
}

#[test]
fn test_coord_display() {
    assert_eq!(Coord::new(4, 1).to_string(), "B4");
    assert_eq!(Coord::new(0, 0).to_string(), "A0");
    assert_eq!(Coord::new(9, 9).to_string(), "J9");
}
