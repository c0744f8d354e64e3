use armada::{
    CellState, Coord, GameSession, PatternShape, GRID_SIZE, NUM_SHIPS, TOTAL_FLEET_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn shapes() -> impl Strategy<Value = PatternShape> {
    prop_oneof![
        Just(PatternShape::Cone),
        Just(PatternShape::Cross),
        Just(PatternShape::Diamond),
    ]
}

fn random_session(seed: u64) -> GameSession {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new();
    while session.next_ship().is_some() {
        let (start, orientation) = session.random_placement(&mut rng).unwrap();
        session.place_next_ship(start, orientation).unwrap();
    }
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_placement_fills_the_roster(seed in any::<u64>()) {
        let session = random_session(seed);
        prop_assert!(session.fleet().is_complete());
        let ship_cells = session
            .grid()
            .cells()
            .filter(|&(_, s)| s == CellState::Ship)
            .count();
        prop_assert_eq!(ship_cells, TOTAL_FLEET_CELLS);
    }

    #[test]
    fn strikes_keep_statistics_consistent(
        seed in any::<u64>(),
        strikes in prop::collection::vec((shapes(), 0..GRID_SIZE, 0..GRID_SIZE), 0..8),
    ) {
        let mut session = random_session(seed);
        let mut last_total = 0;
        for (shape, row, col) in strikes {
            let report = session.strike(shape, Coord::new(row, col));
            prop_assert!(report.shots() <= shape.mask().count_ones() as u32);
            prop_assert!(report.hits() <= report.shots());
            let stats = session.stats();
            prop_assert!(stats.total_shots() >= last_total);
            prop_assert_eq!(stats.total_shots(), stats.hits() + stats.misses());
            prop_assert!((stats.ships_destroyed() as usize) <= NUM_SHIPS);
            last_total = stats.total_shots();
        }
    }

    #[test]
    fn restriking_the_same_center_changes_nothing(
        seed in any::<u64>(),
        shape in shapes(),
        row in 0..GRID_SIZE,
        col in 0..GRID_SIZE,
    ) {
        let mut session = random_session(seed);
        session.strike(shape, Coord::new(row, col));
        let snapshot = session.grid().clone();
        let destroyed = session.stats().ships_destroyed();
        let report = session.strike(shape, Coord::new(row, col));
        prop_assert_eq!(report.hits(), 0);
        prop_assert_eq!(session.grid(), &snapshot);
        prop_assert_eq!(session.stats().ships_destroyed(), destroyed);
    }

    #[test]
    fn cell_states_only_move_forward(
        seed in any::<u64>(),
        strikes in prop::collection::vec((shapes(), 0..GRID_SIZE, 0..GRID_SIZE), 1..6),
    ) {
        let mut session = random_session(seed);
        for (shape, row, col) in strikes {
            let before: Vec<_> = session.grid().cells().collect();
            session.strike(shape, Coord::new(row, col));
            for ((coord, old), (_, new)) in before.into_iter().zip(session.grid().cells()) {
                let legal = old == new
                    || (old == CellState::Ship && new == CellState::Hit)
                    || (old == CellState::Empty && new == CellState::HitWater);
                prop_assert!(legal, "illegal transition at {}: {:?} -> {:?}", coord, old, new);
            }
        }
    }
}
