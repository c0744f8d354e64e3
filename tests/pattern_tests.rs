use armada::{PatternShape, PATTERN_SIZE};

#[test]
fn masks_are_deterministic() {
    for shape in PatternShape::ALL {
        assert_eq!(shape.mask(), shape.mask());
    }
}

#[test]
fn affected_cell_counts() {
    assert_eq!(PatternShape::Cone.mask().count_ones(), 9);
    assert_eq!(PatternShape::Cross.mask().count_ones(), 9);
    assert_eq!(PatternShape::Diamond.mask().count_ones(), 5);
}

#[test]
fn cone_is_a_widening_triangle() {
    let cells: Vec<_> = PatternShape::Cone.mask().iter_set().collect();
    assert_eq!(
        cells,
        vec![
            (0, 2),
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 0),
            (2, 1),
            (2, 2),
            (2, 3),
            (2, 4)
        ]
    );
}

#[test]
fn cross_covers_center_row_and_column() {
    let mask = PatternShape::Cross.mask();
    for k in 0..PATTERN_SIZE {
        assert!(mask.get(2, k).unwrap());
        assert!(mask.get(k, 2).unwrap());
    }
}

#[test]
fn diamond_is_a_compact_rhombus() {
    let cells: Vec<_> = PatternShape::Diamond.mask().iter_set().collect();
    assert_eq!(cells, vec![(0, 2), (1, 1), (1, 2), (1, 3), (2, 2)]);
}
