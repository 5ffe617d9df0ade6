//! API error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::Display;
use serde_json::json;
use tictactoe_rules::MoveError;
use tracing::error;

/// Errors surfaced to API callers. All are terminal and non-retryable.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ApiError {
    /// No game stored under the requested id. 404.
    #[display("Game not found.")]
    NotFound,
    /// The stored game belongs to a different player. 403.
    #[display("This game belongs to a different player.")]
    Forbidden,
    /// The game already reached a terminal outcome. 409.
    #[display("This game has already ended.")]
    Conflict,
    /// The requested spot is already taken. 400.
    #[display("{_0}")]
    InvalidMove(MoveError),
    /// Caller invariant violation inside the core. 500.
    #[display("{_0}")]
    Internal(MoveError),
}

impl std::error::Error for ApiError {}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::InvalidMove { .. } => ApiError::InvalidMove(err),
            MoveError::NoAvailableMoves => ApiError::Internal(err),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::InvalidMove(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Internal server error");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
