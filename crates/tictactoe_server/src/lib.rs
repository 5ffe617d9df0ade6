//! HTTP API for session-based tic-tac-toe against a random CPU opponent.
//!
//! Thin plumbing around [`tictactoe_rules`]: routing, player-identity header
//! handling, Redis persistence, CORS, and process startup. All game
//! semantics live in the rules crate; per-game consistency is delegated to
//! the store (plain read-modify-write, no locking).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod player;
pub mod routes;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use player::PlayerId;
pub use routes::{AppState, router};
pub use store::{GameStore, MemoryStore, RedisStore};
