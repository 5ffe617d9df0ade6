//! Redis-backed game store.

use super::{DEFAULT_TTL_SECS, GameStore, game_key, player_games_key, unix_timestamp};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisError};
use tictactoe_rules::Game;
use tracing::{debug, error, info, instrument};

/// Game store backed by Redis.
///
/// Uses a multiplexed connection manager, so the store is cheap to clone and
/// share. Every operation degrades on failure: errors are logged and read
/// back as absent data, matching the contract documented on [`GameStore`].
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis at the given URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the initial connection
    /// cannot be established.
    #[instrument(skip(url))]
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(url)?;
        let connection = ConnectionManager::new(client).await?;
        info!("Connected to Redis");
        Ok(Self { connection })
    }
}

#[async_trait]
impl GameStore for RedisStore {
    #[instrument(skip(self))]
    async fn read_game(&self, game_id: &str) -> Option<Game> {
        let mut connection = self.connection.clone();
        let key = game_key(game_id);

        let raw: Option<String> = match connection.get(&key).await {
            Ok(value) => value,
            Err(err) => {
                error!(key = %key, error = %err, "Redis GET failed");
                return None;
            }
        };

        match serde_json::from_str(&raw?) {
            Ok(game) => Some(game),
            Err(err) => {
                error!(key = %key, error = %err, "Stored game is not valid JSON");
                None
            }
        }
    }

    #[instrument(skip(self, game), fields(game_id = %game.game_id()))]
    async fn write_game(&self, game: &Game) {
        let payload = match serde_json::to_string(game) {
            Ok(payload) => payload,
            Err(err) => {
                error!(game_id = %game.game_id(), error = %err, "Failed to serialize game");
                return;
            }
        };

        let mut connection = self.connection.clone();
        let key = game_key(game.game_id());
        let result: Result<(), RedisError> =
            connection.set_ex(&key, payload, DEFAULT_TTL_SECS).await;
        if let Err(err) = result {
            error!(key = %key, error = %err, "Redis SETEX failed");
        } else {
            debug!(key = %key, "Game persisted");
        }
    }

    #[instrument(skip(self))]
    async fn add_player_game(&self, player_id: &str, game_id: &str) {
        let mut connection = self.connection.clone();
        let key = player_games_key(player_id);
        let result: Result<(), RedisError> =
            connection.zadd(&key, game_id, unix_timestamp()).await;
        if let Err(err) = result {
            error!(key = %key, error = %err, "Redis ZADD failed");
        }
    }

    #[instrument(skip(self))]
    async fn player_games(&self, player_id: &str) -> Vec<String> {
        let mut connection = self.connection.clone();
        let key = player_games_key(player_id);
        match connection.zrange(&key, 0, -1).await {
            Ok(ids) => ids,
            Err(err) => {
                error!(key = %key, error = %err, "Redis ZRANGE failed");
                Vec::new()
            }
        }
    }
}
