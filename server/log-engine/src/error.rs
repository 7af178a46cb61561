//! Structured error types for the engine binary.
//!
//! Segmentation itself never fails; these cover reading input and writing output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("read {source_name}: {source}")]
  Io {
    source_name: String,
    #[source]
    source: std::io::Error,
  },

  #[error("write: {0}")]
  Write(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn io(source_name: &str, source: std::io::Error) -> Self {
    Self::Io {
      source_name: source_name.to_string(),
      source,
    }
  }
}
