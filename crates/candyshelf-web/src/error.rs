//! Error type and axum `IntoResponse` implementation for the web layer.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

/// A failure that aborts the request. Validation and name-conflict outcomes
/// are not errors here — they re-render the form instead.
#[derive(Debug, Error)]
pub enum Error {
  #[error("render error: {0}")]
  Render(#[from] serde_json::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(e))
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
  }
}
