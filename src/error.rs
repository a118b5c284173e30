//! API error type and HTTP status mapping.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("email not found")]
  NotFound,
  #[error("{0}")]
  Validation(String),
  // Display stays generic; the sqlx detail is logged, not sent to clients.
  #[error("database error")]
  Store(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Store(e) => {
        error!("store error: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    let body = Json(serde_json::json!({ "error": self.to_string() }));
    (status, body).into_response()
  }
}
