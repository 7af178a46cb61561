//! Annotator configuration with sane defaults and env overrides.

use tracing::warn;

/// Remote model settings.
#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
  /// Model name in the generateContent path.
  pub model: String,
  /// API root, without trailing slash.
  pub base_url: String,
  /// Per-request HTTP timeout.
  pub timeout_secs: u64,
  /// Context is cut to this many characters before it goes into the prompt.
  pub max_context_chars: usize,
  /// Env vars tried in order for the API key.
  pub api_key_vars: Vec<String>,
}

impl Default for AnnotatorConfig {
  fn default() -> Self {
    Self {
      model: "gemini-3-flash-preview".into(),
      base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
      timeout_secs: 30,
      max_context_chars: 10_000,
      api_key_vars: vec!["API_KEY".into(), "GEMINI_API_KEY".into()],
    }
  }
}

impl AnnotatorConfig {
  /// Defaults overridden by `ANNOTATOR_MODEL`, `ANNOTATOR_BASE_URL`, `ANNOTATOR_TIMEOUT_SECS`.
  ///
  /// The API key itself is not read here.
  pub fn from_env() -> Self {
    let mut cfg = Self::default();
    if let Some(model) = non_empty_var("ANNOTATOR_MODEL") {
      cfg.model = model;
    }
    if let Some(url) = non_empty_var("ANNOTATOR_BASE_URL") {
      cfg.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(raw) = non_empty_var("ANNOTATOR_TIMEOUT_SECS") {
      match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => cfg.timeout_secs = secs,
        _ => warn!("ignoring invalid ANNOTATOR_TIMEOUT_SECS={:?}", raw),
      }
    }
    cfg
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  std::env::var(name)
    .ok()
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let cfg = AnnotatorConfig::default();
    assert_eq!(cfg.max_context_chars, 10_000);
    assert_eq!(cfg.api_key_vars[0], "API_KEY");
    assert!(!cfg.base_url.ends_with('/'));
  }
}
