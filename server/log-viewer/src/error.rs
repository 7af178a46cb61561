//! HTTP error responses and startup configuration errors.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;

/// Error returned by handlers, rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError {
  status: StatusCode,
  message: String,
}

impl ApiError {
  pub fn not_found(msg: impl Into<String>) -> Self {
    Self {
      status: StatusCode::NOT_FOUND,
      message: msg.into(),
    }
  }

  pub fn conflict(msg: impl Into<String>) -> Self {
    Self {
      status: StatusCode::CONFLICT,
      message: msg.into(),
    }
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self {
      status: StatusCode::INTERNAL_SERVER_ERROR,
      message: msg.into(),
    }
  }

  pub fn no_log_loaded() -> Self {
    Self::not_found("no log loaded")
  }

  pub fn status(&self) -> StatusCode {
    self.status
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (
      self.status,
      Json(serde_json::json!({"error": self.message})),
    )
      .into_response()
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{var} must be {expected}, got {value:?}")]
  Invalid {
    var: &'static str,
    expected: &'static str,
    value: String,
  },
}
