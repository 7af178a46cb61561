//! Structured error types for annotation calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotateError {
  #[error("API key not found in environment variables (tried {0})")]
  MissingCredential(String),

  #[error("http: {0}")]
  Http(#[from] reqwest::Error),

  #[error("upstream rejected request (HTTP {status}): {body}")]
  Upstream { status: u16, body: String },

  #[error("decode: {0}")]
  Decode(String),
}

impl AnnotateError {
  pub fn missing_credential(vars: &[String]) -> Self {
    Self::MissingCredential(vars.join(", "))
  }
}
