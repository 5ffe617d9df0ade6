//! Outcome classification over known move sequences.

use tictactoe_rules::{Coordinate, Mark, Outcome, available, board, outcome};

fn spot(x: u8, y: u8) -> Coordinate {
    Coordinate::new(x, y).unwrap()
}

// Drawn final board:
// X O X
// X O O
// O X X
fn draw_moves() -> Vec<Coordinate> {
    vec![
        spot(0, 0), // X
        spot(1, 0), // O
        spot(2, 0), // X
        spot(1, 1), // O
        spot(0, 1), // X
        spot(2, 1), // O
        spot(1, 2), // X
        spot(0, 2), // O
        spot(2, 2), // X
    ]
}

// Row win for X (top row):
// X X X
// O . .
// . O .
fn row_x_win_moves() -> Vec<Coordinate> {
    vec![
        spot(0, 0), // X
        spot(0, 1), // O
        spot(1, 0), // X
        spot(1, 1), // O
        spot(2, 0), // X
    ]
}

// Column win for O (middle column):
// X O .
// X O .
// . O X
fn column_o_win_moves() -> Vec<Coordinate> {
    vec![
        spot(0, 0), // X
        spot(1, 0), // O
        spot(0, 1), // X
        spot(1, 1), // O
        spot(2, 2), // X
        spot(1, 2), // O
    ]
}

// Main diagonal win for X:
// X . .
// . X .
// . . X
fn diag_main_x_win_moves() -> Vec<Coordinate> {
    vec![
        spot(0, 0), // X
        spot(0, 1), // O
        spot(1, 1), // X
        spot(1, 0), // O
        spot(2, 2), // X
    ]
}

// Anti diagonal win for O:
// X . O
// . O .
// O . X
fn diag_anti_o_win_moves() -> Vec<Coordinate> {
    vec![
        spot(0, 0), // X
        spot(2, 0), // O
        spot(0, 1), // X
        spot(1, 1), // O
        spot(2, 2), // X
        spot(0, 2), // O
    ]
}

#[test]
fn test_ongoing_empty_board() {
    assert_eq!(outcome(&[], Mark::X), Outcome::Ongoing);
    assert_eq!(outcome(&[], Mark::O), Outcome::Ongoing);
}

#[test]
fn test_ongoing_partial_board() {
    let moves = [spot(0, 0), spot(1, 0), spot(2, 2)];
    assert_eq!(outcome(&moves, Mark::O), Outcome::Ongoing);
}

#[test]
fn test_draw_regardless_of_assignment() {
    assert_eq!(outcome(&draw_moves(), Mark::X), Outcome::Draw);
    assert_eq!(outcome(&draw_moves(), Mark::O), Outcome::Draw);
}

#[test]
fn test_drawn_board_layout() {
    let json = serde_json::to_value(board(&draw_moves())).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            ["X", "O", "X"],
            ["X", "O", "O"],
            ["O", "X", "X"],
        ])
    );
}

#[test]
fn test_row_win_maps_through_assignment() {
    assert_eq!(outcome(&row_x_win_moves(), Mark::O), Outcome::CpuWon);
    assert_eq!(outcome(&row_x_win_moves(), Mark::X), Outcome::HumanWon);
}

#[test]
fn test_column_win_maps_through_assignment() {
    assert_eq!(outcome(&column_o_win_moves(), Mark::X), Outcome::CpuWon);
    assert_eq!(outcome(&column_o_win_moves(), Mark::O), Outcome::HumanWon);
}

#[test]
fn test_main_diagonal_win_maps_through_assignment() {
    assert_eq!(outcome(&diag_main_x_win_moves(), Mark::O), Outcome::CpuWon);
    assert_eq!(outcome(&diag_main_x_win_moves(), Mark::X), Outcome::HumanWon);
}

#[test]
fn test_anti_diagonal_win_maps_through_assignment() {
    assert_eq!(outcome(&diag_anti_o_win_moves(), Mark::X), Outcome::CpuWon);
    assert_eq!(outcome(&diag_anti_o_win_moves(), Mark::O), Outcome::HumanWon);
}

#[test]
fn test_board_stamps_one_mark_per_move_with_parity() {
    let moves = draw_moves();
    for length in 0..=moves.len() {
        let prefix = &moves[..length];
        let grid = board(prefix);
        let placed = grid
            .cells()
            .iter()
            .filter(|cell| **cell != tictactoe_rules::Cell::Empty)
            .count();
        assert_eq!(placed, length);
        for (i, mv) in prefix.iter().enumerate() {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(grid.get(*mv), tictactoe_rules::Cell::Occupied(expected));
        }
    }
}

#[test]
fn test_available_accounts_for_every_move() {
    let moves = draw_moves();
    for length in 0..=moves.len() {
        let prefix = &moves[..length];
        assert_eq!(available(prefix).len() + prefix.len(), 9);
    }
}
