//! Game routes: creation, moves, and the (stubbed) history endpoints.

use super::AppState;
use crate::error::ApiError;
use crate::player::PlayerId;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tictactoe_rules::{Coordinate, SessionController};
use tracing::{info, instrument};

/// `POST /game` — creates a game for the caller.
///
/// The human's mark is assigned uniformly at random; when the CPU drew the
/// opening turn its first move is already on the board in the response. The
/// response is the full game representation including the derived fields,
/// with the player id echoed in `X-Player-Id` when it was generated.
#[instrument(skip(state, player), fields(player_id = %player.id()))]
pub async fn new_game(State(state): State<AppState>, player: PlayerId) -> Response {
    let game = {
        let mut controller = SessionController::new(rand::rng());
        controller.create_game(player.id())
    };

    state.store.write_game(&game).await;
    state.store.add_player_game(player.id(), game.game_id()).await;

    info!(game_id = %game.game_id(), "Game created and persisted");

    let mut response = (StatusCode::CREATED, Json(game.view())).into_response();
    player.echo(response.headers_mut());
    response
}

/// `POST /game/{game_id}/move` — applies the caller's move, then one CPU
/// reply while the game is still ongoing.
///
/// Boundary checks run before the controller: the game must exist (404),
/// belong to the caller (403), and still be ongoing (409). An occupied spot
/// is a 400; an out-of-range coordinate is rejected at deserialization.
#[instrument(skip(state, player), fields(game_id = %game_id, player_id = %player.id()))]
pub async fn make_a_move(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    player: PlayerId,
    Json(coordinate): Json<Coordinate>,
) -> Result<Response, ApiError> {
    let mut game = state
        .store
        .read_game(&game_id)
        .await
        .ok_or(ApiError::NotFound)?;

    if game.player_id() != player.id() {
        return Err(ApiError::Forbidden);
    }
    if !game.outcome().is_ongoing() {
        return Err(ApiError::Conflict);
    }

    {
        let mut controller = SessionController::new(rand::rng());
        controller.apply_human_move(&mut game, coordinate)?;
    }

    state.store.write_game(&game).await;

    info!(
        game_id = %game.game_id(),
        moves = game.moves().len(),
        outcome = ?game.outcome(),
        "Move applied and persisted"
    );

    let mut response = (StatusCode::OK, Json(game.view())).into_response();
    player.echo(response.headers_mut());
    Ok(response)
}

/// `GET /game/{game_id}/history` — not implemented yet.
pub async fn game_history(Path(_game_id): Path<String>) -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

/// `GET /game/history` — not implemented yet.
pub async fn all_games_history() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}
