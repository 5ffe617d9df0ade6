//! Errors produced by the session controller.

use crate::coordinate::Coordinate;
use derive_more::{Display, Error};

/// A move that the session controller rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target spot is already occupied. A client error; not retried.
    #[display("Spot ({}, {}) is already taken.", coordinate.x(), coordinate.y())]
    InvalidMove {
        /// The rejected coordinate.
        coordinate: Coordinate,
    },
    /// The CPU was asked to move on a full board. The boundary layer rejects
    /// ended games before the controller runs, so this indicates a caller
    /// invariant violation and is surfaced as a server fault.
    #[display("Can't choose a random move because the game is over")]
    NoAvailableMoves,
}
