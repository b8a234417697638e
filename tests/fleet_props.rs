use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use salvo::{
    is_fleet_destroyed, resolve_shot, setup_fleet, Board, CellState, Fleet, ShotOutcome,
    DEFAULT_SHIP_SIZES,
};

fn random_side(seed: u64) -> (Board, Fleet) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    setup_fleet(&DEFAULT_SHIP_SIZES, &mut board, &mut fleet, &mut rng).unwrap();
    (board, fleet)
}

fn touches(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn setup_respects_bounds_and_spacing(seed in any::<u64>()) {
        let (board, fleet) = random_side(seed);

        let mut sizes = fleet.sizes();
        sizes.sort_unstable();
        prop_assert_eq!(sizes, vec![1, 2, 2, 3, 4, 5]);

        for ship in fleet.ships() {
            for (r, c) in ship.cells() {
                prop_assert!(Board::in_bounds(r, c));
                prop_assert_eq!(board.cell_state(r, c), CellState::ShipOccupied);
            }
        }
        let ships = fleet.ships();
        for i in 0..ships.len() {
            for j in (i + 1)..ships.len() {
                for a in ships[i].cells() {
                    for b in ships[j].cells() {
                        prop_assert!(!touches(a, b), "{:?} touches {:?}", ships[i], ships[j]);
                    }
                }
            }
        }
        prop_assert_eq!(board.ship_map().count_ones(), 17);
    }

    #[test]
    fn shot_changes_at_most_one_ship(
        seed in any::<u64>(),
        row in 0..10usize,
        col in 0..10usize,
    ) {
        let (mut board, mut fleet) = random_side(seed);
        let before = board.cell_state(row, col);
        let hits_before: Vec<usize> = fleet.ships().iter().map(|s| s.hits()).collect();

        let outcome = resolve_shot(row, col, &mut board, &mut fleet).unwrap();
        let hits_after: Vec<usize> = fleet.ships().iter().map(|s| s.hits()).collect();
        let changed: Vec<usize> = (0..hits_before.len())
            .filter(|&i| hits_before[i] != hits_after[i])
            .collect();

        match before {
            CellState::Empty => {
                prop_assert_eq!(outcome, ShotOutcome::Miss);
                prop_assert_eq!(board.cell_state(row, col), CellState::Miss);
                prop_assert!(changed.is_empty());
            }
            CellState::ShipOccupied => {
                prop_assert!(outcome.is_hit());
                prop_assert_eq!(board.cell_state(row, col), CellState::Hit);
                prop_assert_eq!(changed.len(), 1);
                let i = changed[0];
                prop_assert_eq!(hits_after[i], hits_before[i] + 1);
                let ship = fleet.ships()[i];
                prop_assert!(ship.contains(row, col));
                prop_assert_eq!(outcome == ShotOutcome::Sunk, ship.is_sunk());
            }
            other => prop_assert!(false, "fresh board had {:?}", other),
        }
    }

    #[test]
    fn fleet_destroyed_only_when_every_cell_hit(seed in any::<u64>()) {
        let (mut board, mut fleet) = random_side(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut targets: Vec<(usize, usize)> = board.ship_cells().collect();
        // shuffle so ships sink in arbitrary order
        for i in (1..targets.len()).rev() {
            let j = rng.random_range(0..=i);
            targets.swap(i, j);
        }
        let last = targets.len() - 1;
        for (k, (r, c)) in targets.into_iter().enumerate() {
            prop_assert!(!is_fleet_destroyed(&fleet));
            resolve_shot(r, c, &mut board, &mut fleet).unwrap();
            prop_assert_eq!(is_fleet_destroyed(&fleet), k == last);
        }
    }
}
