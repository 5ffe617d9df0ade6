//! Pure rules engine over an ordered move list.
//!
//! These functions are side-effect free and idempotent: they only read their
//! input and allocate fresh output, so they are safe to call concurrently.

use crate::coordinate::Coordinate;
use crate::types::{Board, Cell, Mark, Outcome};

/// The 8 winning lines as flat row-major indices, in the fixed scan order:
/// rows top to bottom, columns left to right, main diagonal, anti diagonal.
/// The first fully-matched line determines the winner; valid play never
/// produces two simultaneous lines, so the order only matters for
/// determinism.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Replays `moves` in order and returns the resulting board.
///
/// The move at index `i` stamps an `X` if `i` is even, an `O` otherwise.
/// No bounds or duplicate checking happens here; the caller guarantees the
/// move list is valid.
pub fn board(moves: &[Coordinate]) -> Board {
    let mut board = Board::new();
    for (i, spot) in moves.iter().enumerate() {
        board.set(*spot, Mark::for_move_index(i));
    }
    board
}

/// All currently empty cells, in stable row-major order (row 0 first,
/// left to right).
pub fn available(moves: &[Coordinate]) -> Vec<Coordinate> {
    let board = board(moves);
    Coordinate::all()
        .filter(|spot| board.get(*spot) == Cell::Empty)
        .collect()
}

/// The mark holding a completed line, if any.
pub fn winning_mark(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            return match cell {
                Cell::Occupied(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }
    None
}

/// Classifies the game derived from `moves` and the human's mark.
///
/// A completed line maps to [`Outcome::HumanWon`] or [`Outcome::CpuWon`]
/// through `human_plays_as`; otherwise the game is [`Outcome::Ongoing`]
/// while an empty cell remains, and [`Outcome::Draw`] once none does.
pub fn outcome(moves: &[Coordinate], human_plays_as: Mark) -> Outcome {
    let board = board(moves);

    if let Some(winner) = winning_mark(&board) {
        return if winner == human_plays_as {
            Outcome::HumanWon
        } else {
            Outcome::CpuWon
        };
    }

    if board.has_empty_cell() {
        Outcome::Ongoing
    } else {
        Outcome::Draw
    }
}
