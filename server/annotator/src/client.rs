//! Gemini-backed annotator.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AnnotatorConfig;
use crate::error::AnnotateError;
use crate::prompt;

/// Returned when the model answers with no text.
pub const EMPTY_ANALYSIS: &str = "No analysis could be generated.";

/// Explains one incident given its context and category label.
///
/// Implementations hold no per-call mutable state, so calls for different
/// incidents may run concurrently.
pub trait Annotate: Send + Sync {
  fn annotate(
    &self,
    context: &str,
    category: &str,
  ) -> impl Future<Output = Result<String, AnnotateError>> + Send;
}

pub struct GeminiAnnotator {
  config: AnnotatorConfig,
  client: reqwest::Client,
}

impl GeminiAnnotator {
  pub fn new(config: AnnotatorConfig) -> Result<Self, AnnotateError> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()?;
    Ok(Self { config, client })
  }

  pub fn config(&self) -> &AnnotatorConfig {
    &self.config
  }

  pub fn endpoint(&self) -> String {
    format!(
      "{}/models/{}:generateContent",
      self.config.base_url, self.config.model
    )
  }

  /// First non-empty key among the configured env vars.
  fn api_key(&self) -> Result<String, AnnotateError> {
    self
      .config
      .api_key_vars
      .iter()
      .filter_map(|name| std::env::var(name).ok())
      .map(|v| v.trim().to_string())
      .find(|v| !v.is_empty())
      .ok_or_else(|| AnnotateError::missing_credential(&self.config.api_key_vars))
  }
}

impl Annotate for GeminiAnnotator {
  async fn annotate(&self, context: &str, category: &str) -> Result<String, AnnotateError> {
    let api_key = self.api_key()?;

    let snippet = prompt::truncate_context(context, self.config.max_context_chars);
    if snippet.len() < context.len() {
      debug!(
        original = context.len(),
        sent = snippet.len(),
        "context truncated for annotation"
      );
    }
    let request_body = serde_json::json!({
      "contents": [{"parts": [{"text": prompt::build_prompt(snippet, category)}]}],
      "generationConfig": {"thinkingConfig": {"thinkingBudget": 0}}
    });

    let resp = self
      .client
      .post(self.endpoint())
      .header("x-goog-api-key", &api_key)
      .header("content-type", "application/json")
      .json(&request_body)
      .send()
      .await?;

    if !resp.status().is_success() {
      let status = resp.status().as_u16();
      let body = resp.text().await.unwrap_or_default();
      warn!(status, "annotation request rejected");
      return Err(AnnotateError::Upstream { status, body });
    }

    let body: Value = resp
      .json()
      .await
      .map_err(|e| AnnotateError::Decode(e.to_string()))?;
    Ok(extract_text(&body).unwrap_or_else(|| EMPTY_ANALYSIS.to_string()))
  }
}

/// Join the text parts of the first candidate. `None` when there is no text.
pub fn extract_text(body: &Value) -> Option<String> {
  let parts = body
    .get("candidates")?
    .as_array()?
    .first()?
    .get("content")?
    .get("parts")?
    .as_array()?;

  let text: Vec<&str> = parts
    .iter()
    .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
    .collect();
  let joined = text.concat();
  if joined.trim().is_empty() {
    None
  } else {
    Some(joined)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn extracts_first_candidate_text() {
    let body = json!({
      "candidates": [
        {"content": {"parts": [{"text": "## Root cause\n"}, {"text": "NPE in onCreate"}]}},
        {"content": {"parts": [{"text": "ignored"}]}}
      ]
    });
    assert_eq!(extract_text(&body).as_deref(), Some("## Root cause\nNPE in onCreate"));
  }

  #[test]
  fn missing_or_blank_text_is_none() {
    assert_eq!(extract_text(&json!({})), None);
    assert_eq!(extract_text(&json!({"candidates": []})), None);
    assert_eq!(
      extract_text(&json!({"candidates": [{"content": {"parts": [{"text": "  "}]}}]})),
      None
    );
  }

  #[test]
  fn endpoint_uses_model() {
    let a = GeminiAnnotator::new(AnnotatorConfig {
      model: "m1".into(),
      base_url: "http://localhost:9".into(),
      ..AnnotatorConfig::default()
    })
    .unwrap();
    assert_eq!(a.endpoint(), "http://localhost:9/models/m1:generateContent");
  }
}
