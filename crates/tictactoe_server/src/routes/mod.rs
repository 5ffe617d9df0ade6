//! Router assembly and shared handler state.

pub mod game;
pub mod hello;

use crate::config::Config;
use crate::store::GameStore;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator.
    pub store: Arc<dyn GameStore>,
}

impl AppState {
    /// Creates handler state around a store.
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }
}

/// Builds the application router with CORS configured from `config`.
pub fn router(state: AppState, config: &Config) -> Router {
    // Credentials are allowed, so wildcards are off the table; origins come
    // from the config and methods/headers mirror the preflight request.
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origins())
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/hello", get(hello::get_hello))
        .route("/game", post(game::new_game))
        .route("/game/{game_id}/move", post(game::make_a_move))
        .route("/game/{game_id}/history", get(game::game_history))
        .route("/game/history", get(game::all_games_history))
        .layer(cors)
        .with_state(state)
}
