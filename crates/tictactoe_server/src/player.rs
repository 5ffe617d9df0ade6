//! Player identity from the `X-Player-Id` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use std::convert::Infallible;
use tracing::debug;
use uuid::Uuid;

/// Header carrying the opaque client-supplied player identifier.
pub const PLAYER_ID_HEADER: &str = "x-player-id";

/// The caller's player identity.
///
/// Extracted from the `X-Player-Id` header; when the header is absent a
/// fresh UUID is generated and [`PlayerId::echo`] writes it back onto the
/// response so the client can reuse it. This is the only authentication the
/// API has.
#[derive(Debug, Clone)]
pub struct PlayerId {
    id: String,
    generated: bool,
}

impl PlayerId {
    /// The player identifier string.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Writes the identifier back onto the response headers when it was
    /// generated server-side.
    pub fn echo(&self, headers: &mut HeaderMap) {
        if !self.generated {
            return;
        }
        if let Ok(value) = HeaderValue::from_str(&self.id) {
            headers.insert(PLAYER_ID_HEADER, value);
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for PlayerId {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let supplied = parts
            .headers
            .get(PLAYER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        match supplied {
            Some(id) => Ok(Self {
                id,
                generated: false,
            }),
            None => {
                let id = Uuid::new_v4().to_string();
                debug!(player_id = %id, "Generated player id for anonymous caller");
                Ok(Self {
                    id,
                    generated: true,
                })
            }
        }
    }
}
