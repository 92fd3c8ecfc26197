//! Board factory and board invariant tests

use rand::rngs::StdRng;
use rand::SeedableRng;

use two_power::core::{
    create_empty_board, create_initial_board, create_initial_board_with, Board, EngineError,
    InitialTiles,
};
use two_power::types::{Cell, Position, GRID_SIZE};

#[test]
fn test_empty_board_is_idempotent() {
    let a = create_empty_board();
    let b = create_empty_board();
    assert_eq!(a, b);
    assert_eq!(a.count_empty(), GRID_SIZE * GRID_SIZE);
    assert!(a.cells().all(|c| c.empty && c.value == 0 && !c.bounce && !c.just_inserted));
}

#[test]
fn test_empty_board_positions_cover_grid() {
    let board = create_empty_board();
    let mut seen = [false; GRID_SIZE * GRID_SIZE];
    for cell in board.cells() {
        let idx = cell.position.index();
        assert!(!seen[idx], "duplicate position {:?}", cell.position);
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_initial_board_values_and_flags() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut saw_eight = false;
    for _ in 0..500 {
        let board = create_initial_board(&mut rng);
        assert_eq!(board.count_empty(), 23);
        for cell in board.cells().filter(|c| !c.empty) {
            assert!(matches!(cell.value, 2 | 4 | 8));
            assert!(cell.just_inserted);
            saw_eight |= cell.value == 8;
        }
    }
    assert!(saw_eight, "weighted initial tiles should occasionally produce an 8");
}

#[test]
fn test_initial_board_two_or_four_policy() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let board = create_initial_board_with(&mut rng, InitialTiles::TwoOrFour);
        assert!(board.cells().filter(|c| !c.empty).all(|c| c.value == 2 || c.value == 4));
    }
}

#[test]
fn test_from_rows_rejects_wrong_dimensions() {
    let row: Vec<Cell> = (0..GRID_SIZE as u8)
        .map(|c| Cell::empty_at(Position::new(0, c)))
        .collect();
    let err = Board::from_rows(vec![row.clone(); 4]).unwrap_err();
    assert!(matches!(err, EngineError::InvariantViolation(_)));

    let mut rows: Vec<Vec<Cell>> = create_empty_board().rows().iter().map(|r| r.to_vec()).collect();
    rows[2].pop();
    assert!(Board::from_rows(rows).is_err());
}

#[test]
fn test_from_rows_rejects_duplicate_positions() {
    let mut rows: Vec<Vec<Cell>> = create_empty_board().rows().iter().map(|r| r.to_vec()).collect();
    rows[1][3] = Cell::tile(Position::new(0, 0), 2);
    let err = Board::from_rows(rows).unwrap_err();
    assert!(err.to_string().contains("claims position"));
}

#[test]
fn test_from_rows_accepts_engine_cells() {
    let source = Board::from_values([[2, 0, 4, 0, 8]; GRID_SIZE]);
    let rows: Vec<Vec<Cell>> = source.rows().iter().map(|r| r.to_vec()).collect();
    assert_eq!(Board::from_rows(rows).unwrap(), source);
}
