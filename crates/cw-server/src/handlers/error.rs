//! HTTP rendering of the shared error taxonomy

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use cw_core::Error;
use serde_json::json;
use tracing::error;

/// Wrapper rendering `cw_core::Error` as a JSON error response
pub struct ApiError(pub Error);

/// Result type for request handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<Error> for ApiError {
  fn from(err: Error) -> Self {
    ApiError(err)
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self.0 {
      Error::Validation(message) => (StatusCode::BAD_REQUEST, message),
      Error::Conflict(message) => (StatusCode::CONFLICT, message),
      Error::NotFound(message) => (StatusCode::NOT_FOUND, message),
      Error::Upstream(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
      other => {
        // Rate limits are absorbed by the gateway and should never get here
        error!("Unexpected error reached the HTTP layer: {}", other);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
      }
    };

    (status, Json(json!({ "error": message }))).into_response()
  }
}
