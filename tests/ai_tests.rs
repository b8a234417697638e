use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{choose_shot, Board, CellState, ComputerPlayer, Player};

#[test]
fn test_choose_shot_never_repeats_until_board_full() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut board = Board::new();
    for _ in 0..100 {
        let (r, c) = choose_shot(&board, &mut rng).expect("unplayed cell left");
        assert!(!board.is_played(r, c), "({r}, {c}) chosen twice");
        board.set_cell_state(r, c, CellState::Miss);
    }
    assert_eq!(board.unplayed_count(), 0);
    assert_eq!(choose_shot(&board, &mut rng), None);
}

#[test]
fn test_choose_shot_finds_last_free_cell() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    for (r, c) in Board::coords() {
        if (r, c) != (6, 3) {
            board.set_cell_state(r, c, CellState::Hit);
        }
    }
    assert_eq!(choose_shot(&board, &mut rng), Some((6, 3)));
}

#[test]
fn test_choose_shot_ignores_ship_layout() {
    // unhit ships are valid targets, the computer cannot see them anyway
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::new();
    for (r, c) in Board::coords() {
        board.set_cell_state(r, c, CellState::Miss);
    }
    board.set_cell_state(2, 2, CellState::ShipOccupied);
    assert_eq!(choose_shot(&board, &mut rng), Some((2, 2)));
}

#[test]
fn test_computer_player_uses_random_strategy() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut player = ComputerPlayer::new();
    let mut board = Board::new();
    board.set_cell_state(0, 0, CellState::Miss);
    for _ in 0..50 {
        let (r, c) = player.select_target(&mut rng, &board).unwrap();
        assert_ne!((r, c), (0, 0));
    }
}
