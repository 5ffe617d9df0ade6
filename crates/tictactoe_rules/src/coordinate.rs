//! Bounded board coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A spot on the tic-tac-toe board, 0-based.
///
/// Both components are bounded to `[0, 2]`; construction and deserialization
/// reject anything outside the grid. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    x: u8,
    y: u8,
}

/// Error for a coordinate outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("coordinate ({x}, {y}) is outside the 3x3 board")]
pub struct OutOfBounds {
    /// Rejected column.
    pub x: u8,
    /// Rejected row.
    pub y: u8,
}

impl Coordinate {
    /// Creates a coordinate, rejecting components outside `[0, 2]`.
    pub fn new(x: u8, y: u8) -> Result<Self, OutOfBounds> {
        if x > 2 || y > 2 {
            return Err(OutOfBounds { x, y });
        }
        Ok(Self { x, y })
    }

    /// Column, in `[0, 2]`.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Row, in `[0, 2]`.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Flat row-major board index, in `[0, 8]`.
    pub(crate) fn index(&self) -> usize {
        self.y as usize * 3 + self.x as usize
    }

    /// All nine coordinates in row-major order (row 0 first, left to right).
    pub fn all() -> impl Iterator<Item = Self> {
        (0..3u8).flat_map(|y| (0..3u8).map(move |x| Self { x, y }))
    }
}

/// Unvalidated wire form of a coordinate.
#[derive(Debug, Deserialize)]
struct RawCoordinate {
    x: u8,
    y: u8,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = OutOfBounds;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y)
    }
}
