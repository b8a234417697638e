use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    cell_is_vacant, place_random, place_ship, setup_fleet, valid_positions, Board, CellState,
    Fleet, Orientation, PlacementCandidate, PlacementError, ShipError, DEFAULT_SHIP_SIZES,
    TOTAL_SHIP_CELLS,
};

fn at(row: usize, col: usize, orientation: Orientation) -> PlacementCandidate {
    PlacementCandidate {
        row,
        col,
        orientation,
    }
}

#[test]
fn test_valid_positions_empty_board_counts() {
    let board = Board::new();
    // one candidate per cell for single-cell ships
    assert_eq!(valid_positions(1, &board).len(), 100);
    for size in 2..=5 {
        let positions = valid_positions(size, &board);
        let horizontal = positions
            .iter()
            .filter(|p| p.orientation == Orientation::Horizontal)
            .count();
        let vertical = positions.len() - horizontal;
        assert_eq!(horizontal, 10 * (10 - size + 1), "size {size}");
        assert_eq!(vertical, 10 * (10 - size + 1), "size {size}");
    }
    assert!(valid_positions(0, &board).is_empty());
    assert!(valid_positions(11, &board).is_empty());
}

#[test]
fn test_valid_positions_reach_last_row_and_col() {
    let board = Board::new();
    let positions = valid_positions(5, &board);
    assert!(positions.contains(&at(9, 5, Orientation::Horizontal)));
    assert!(positions.contains(&at(5, 9, Orientation::Vertical)));
    assert!(!positions.contains(&at(9, 6, Orientation::Horizontal)));
    assert!(!positions.contains(&at(6, 9, Orientation::Vertical)));
}

#[test]
fn test_neighbourhood_blocks_candidates() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    place_ship(1, at(0, 0, Orientation::Horizontal), &mut board, &mut fleet).unwrap();

    // (0,0) and its three neighbours are gone
    assert_eq!(valid_positions(1, &board).len(), 96);
    assert!(!cell_is_vacant(&board, 1, 1));
    assert!(cell_is_vacant(&board, 2, 2));
    assert!(cell_is_vacant(&board, 0, 2));
}

#[test]
fn test_place_ship_rejects_touching() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    place_ship(3, at(4, 2, Orientation::Horizontal), &mut board, &mut fleet).unwrap();

    // diagonal contact at (5,5)
    let err = place_ship(2, at(5, 5, Orientation::Vertical), &mut board, &mut fleet).unwrap_err();
    assert_eq!(
        err,
        PlacementError::Blocked {
            row: 5,
            col: 5,
            size: 2
        }
    );
    // overlap
    assert!(place_ship(2, at(3, 3, Orientation::Vertical), &mut board, &mut fleet).is_err());
    // one empty cell in between is fine
    place_ship(2, at(6, 2, Orientation::Horizontal), &mut board, &mut fleet).unwrap();
    assert_eq!(fleet.len(), 2);
}

#[test]
fn test_place_ship_out_of_bounds() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    let err = place_ship(4, at(8, 0, Orientation::Vertical), &mut board, &mut fleet).unwrap_err();
    assert_eq!(
        err,
        PlacementError::Ship(ShipError::OutOfBounds {
            row: 8,
            col: 0,
            size: 4
        })
    );
    assert!(fleet.is_empty());
    assert!(board.ship_map().is_empty());
}

#[test]
fn test_place_random_marks_board_and_fleet() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    let mut rng = SmallRng::seed_from_u64(42);
    let pick = place_random(4, &mut board, &mut fleet, &mut rng).unwrap();

    assert_eq!(fleet.len(), 1);
    let ship = fleet.ships()[0];
    assert_eq!(ship.origin(), (pick.row, pick.col));
    assert_eq!(ship.orientation(), pick.orientation);
    assert_eq!(ship.hits(), 0);
    for (r, c) in ship.cells() {
        assert_eq!(board.cell_state(r, c), CellState::ShipOccupied);
    }
    assert_eq!(board.ship_map().count_ones(), 4);
}

#[test]
fn test_setup_default_fleet() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    let mut rng = SmallRng::seed_from_u64(7);
    setup_fleet(&DEFAULT_SHIP_SIZES, &mut board, &mut fleet, &mut rng).unwrap();

    assert_eq!(fleet.sizes(), DEFAULT_SHIP_SIZES.to_vec());
    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    assert!(!fleet.is_destroyed());
}

#[test]
fn test_setup_too_dense_is_exhausted() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    let mut rng = SmallRng::seed_from_u64(3);
    let err = setup_fleet(&[5; 20], &mut board, &mut fleet, &mut rng).unwrap_err();
    assert_eq!(err, PlacementError::Exhausted { size: 5 });
    // ships placed before the failure stay recorded
    assert!(!fleet.is_empty());
    assert!(fleet.len() < 20);
}

#[test]
fn test_same_seed_same_layout() {
    let mut a = (Board::new(), Fleet::new());
    let mut b = (Board::new(), Fleet::new());
    let mut rng_a = SmallRng::seed_from_u64(99);
    let mut rng_b = SmallRng::seed_from_u64(99);
    setup_fleet(&DEFAULT_SHIP_SIZES, &mut a.0, &mut a.1, &mut rng_a).unwrap();
    setup_fleet(&DEFAULT_SHIP_SIZES, &mut b.0, &mut b.1, &mut rng_b).unwrap();
    assert_eq!(a.0, b.0);
    assert_eq!(a.1, b.1);
}

#[test]
fn test_place_random_draws_from_whole_pool() {
    use std::collections::HashMap;

    let mut rng = SmallRng::seed_from_u64(2718);
    let mut seen: HashMap<(usize, usize, Orientation), usize> = HashMap::new();
    let draws = 12_000;
    for _ in 0..draws {
        let mut board = Board::new();
        let mut fleet = Fleet::new();
        let pick = place_random(5, &mut board, &mut fleet, &mut rng).unwrap();
        *seen.entry((pick.row, pick.col, pick.orientation)).or_default() += 1;
    }

    assert_eq!(seen.len(), valid_positions(5, &Board::new()).len());
    assert_eq!(seen.len(), 120);
    // expected 100 hits per candidate
    assert!(seen.values().all(|&n| (50..=150).contains(&n)), "{seen:?}");
    let horizontal: usize = seen
        .iter()
        .filter(|(k, _)| k.2 == Orientation::Horizontal)
        .map(|(_, n)| n)
        .sum();
    let share = horizontal as f64 / draws as f64;
    assert!((0.45..=0.55).contains(&share), "horizontal share {share}");
}
