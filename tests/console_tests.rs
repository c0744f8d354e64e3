use armada::{parse_coord, parse_orientation, Coord, Orientation};

#[test]
fn parses_valid_coordinates() {
    assert_eq!(parse_coord("A5"), Some(Coord::new(5, 0)));
    assert_eq!(parse_coord("j9"), Some(Coord::new(9, 9)));
    assert_eq!(parse_coord("b0"), Some(Coord::new(0, 1)));
}

#[test]
fn rejects_malformed_coordinates() {
    for input in ["", "A", "5", "K3", "A10", "5A", "A-1", "A5x", "AA"] {
        assert_eq!(parse_coord(input), None, "input {:?}", input);
    }
}

#[test]
fn parses_orientations() {
    assert_eq!(parse_orientation("H"), Some(Orientation::Horizontal));
    assert_eq!(parse_orientation("v"), Some(Orientation::Vertical));
    assert_eq!(parse_orientation("d"), Some(Orientation::Diagonal));
}

#[test]
fn rejects_malformed_orientations() {
    for input in ["", "x", "HH", "hv", "1"] {
        assert_eq!(parse_orientation(input), None, "input {:?}", input);
    }
}
