//! Pure tic-tac-toe rules and session control for the game API.
//!
//! The ordered move list is the single source of truth: board, available
//! spots, and outcome are always derived from it on demand, never stored.
//! Crosses always play first, so move index parity determines the mark.
//!
//! # Architecture
//!
//! - **Rules engine**: pure functions mapping a move list to board state,
//!   available spots, and outcome ([`board`], [`available`], [`outcome`]).
//! - **Session controller**: move validation, turn orchestration, and the
//!   random CPU opponent ([`SessionController`]), with randomness injected
//!   through the [`Randomness`] capability.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chance;
mod controller;
mod coordinate;
mod error;
mod game;
mod rules;
mod types;

pub use chance::Randomness;
pub use controller::SessionController;
pub use coordinate::{Coordinate, OutOfBounds};
pub use error::MoveError;
pub use game::{Game, GameView};
pub use rules::{available, board, outcome, winning_mark};
pub use types::{Board, Cell, Mark, Outcome};
