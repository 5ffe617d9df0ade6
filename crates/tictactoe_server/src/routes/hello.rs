//! Liveness route.

use axum::Json;
use serde_json::{Value, json};

/// `GET /hello` — trivial liveness check.
pub async fn get_hello() -> Json<Value> {
    Json(json!({ "message": "hello world" }))
}
