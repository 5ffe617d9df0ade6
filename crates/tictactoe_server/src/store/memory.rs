//! In-memory game store for tests and local development.

use super::GameStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tictactoe_rules::Game;
use tokio::sync::RwLock;

/// In-process [`GameStore`] holding everything in hash maps.
///
/// Ignores TTLs — entries live for the life of the process. Useful wherever
/// the Redis-backed store would use `:memory:` semantics: API tests and
/// local runs without a Redis instance.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: RwLock<HashMap<String, Game>>,
    player_games: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn read_game(&self, game_id: &str) -> Option<Game> {
        self.games.read().await.get(game_id).cloned()
    }

    async fn write_game(&self, game: &Game) {
        self.games
            .write()
            .await
            .insert(game.game_id().to_string(), game.clone());
    }

    async fn add_player_game(&self, player_id: &str, game_id: &str) {
        self.player_games
            .write()
            .await
            .entry(player_id.to_string())
            .or_default()
            .push(game_id.to_string());
    }

    async fn player_games(&self, player_id: &str) -> Vec<String> {
        self.player_games
            .read()
            .await
            .get(player_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game(game_id: &str, player_id: &str) -> Game {
        serde_json::from_value(serde_json::json!({
            "game_id": game_id,
            "player_id": player_id,
            "human_plays_as": "X",
            "moves": [],
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_read_back_written_game() {
        let store = MemoryStore::new();
        let game = sample_game("g-1", "p-1");

        store.write_game(&game).await;

        assert_eq!(store.read_game("g-1").await, Some(game));
        assert_eq!(store.read_game("g-2").await, None);
    }

    #[tokio::test]
    async fn test_player_index_preserves_order() {
        let store = MemoryStore::new();
        store.add_player_game("p-1", "g-1").await;
        store.add_player_game("p-1", "g-2").await;

        assert_eq!(store.player_games("p-1").await, vec!["g-1", "g-2"]);
        assert!(store.player_games("p-2").await.is_empty());
    }
}
