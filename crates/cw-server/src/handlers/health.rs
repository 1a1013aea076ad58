//! Liveness/version probe

use axum::response::Json;
use serde_json::{json, Value};

/// GET / - liveness probe with the crate version
pub async fn health() -> Json<Value> {
  Json(json!({
    "message": "Crypto API is running",
    "version": env!("CARGO_PKG_VERSION"),
  }))
}
