//! Persistence collaborator: key-value game storage plus a per-player game
//! index.
//!
//! The contract the core relies on is deliberately loose: I/O failures are
//! logged and degraded to "no data" rather than propagated, which callers
//! must treat as equivalent to absence. No conditional writes or locking —
//! two concurrent writers to the same game id can lose an update; this is a
//! known gap of the system, resolved (if ever) at this boundary rather than
//! in the rules crate.

mod memory;
mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

use async_trait::async_trait;
use tictactoe_rules::Game;

/// TTL applied to stored games: 24 hours. Expiry is the store's
/// responsibility; games are never deleted by the application.
pub const DEFAULT_TTL_SECS: u64 = 86_400;

/// Storage key for a game.
pub(crate) fn game_key(game_id: &str) -> String {
    format!("game:{game_id}")
}

/// Storage key for a player's ordered game index.
pub(crate) fn player_games_key(player_id: &str) -> String {
    format!("player:{player_id}:games")
}

/// Key-value persistence for games.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Loads the stored game, or `None` when missing, unreadable, or the
    /// backend failed.
    async fn read_game(&self, game_id: &str) -> Option<Game>;

    /// Persists the stored fields of `game` (derived fields are never
    /// written) with the default TTL. Plain last-writer-wins.
    async fn write_game(&self, game: &Game);

    /// Appends `game_id` to the player's ordered game index, scored by the
    /// current unix timestamp. Kept for future history features.
    async fn add_player_game(&self, player_id: &str, game_id: &str);

    /// All game ids recorded for the player, oldest first. Empty on backend
    /// failure.
    async fn player_games(&self, player_id: &str) -> Vec<String>;
}

/// Seconds since the unix epoch, for index scores.
pub(crate) fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
