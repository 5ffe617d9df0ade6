//! Core domain types: marks, cells, the board, and game outcomes.

use crate::coordinate::Coordinate;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

/// A player's mark on the board.
///
/// Crosses always play first: the move at an even index is an `X`, the move
/// at an odd index is an `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Cross (plays first).
    X,
    /// Circle (plays second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark stamped by the move at `index`, by parity.
    pub fn for_move_index(index: usize) -> Self {
        if index % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No mark placed here yet.
    Empty,
    /// Occupied by a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Wire representation: `"."` for empty, `"X"` / `"O"` for marks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cell::Empty => ".",
            Cell::Occupied(Mark::X) => "X",
            Cell::Occupied(Mark::O) => "O",
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The 3x3 board, row-major.
///
/// Serializes as three rows of three cell strings, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// The cell at the given coordinate.
    pub fn get(&self, coordinate: Coordinate) -> Cell {
        self.cells[coordinate.index()]
    }

    /// Stamps a mark. The caller guarantees the cell is addressable; no
    /// occupancy check happens here.
    pub(crate) fn set(&mut self, coordinate: Coordinate, mark: Mark) {
        self.cells[coordinate.index()] = Cell::Occupied(mark);
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// True if at least one cell is still empty.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|cell| *cell == Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(3))?;
        for row in self.cells.chunks(3) {
            rows.serialize_element(row)?;
        }
        rows.end()
    }
}

/// Terminal-or-ongoing classification of a game, derived from its move list
/// and the human's mark assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still being played.
    #[serde(rename = "ongoing")]
    Ongoing,
    /// The human's mark completed a line.
    #[serde(rename = "human won")]
    HumanWon,
    /// The CPU's mark completed a line.
    #[serde(rename = "CPU won")]
    CpuWon,
    /// Full board, no line.
    #[serde(rename = "draw")]
    Draw,
}

impl Outcome {
    /// True while the game accepts further moves.
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Outcome::Ongoing)
    }
}
