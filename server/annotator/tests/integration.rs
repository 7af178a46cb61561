//! Integration tests for the annotator.

use std::sync::{Arc, Mutex};

use annotator::client::EMPTY_ANALYSIS;
use annotator::{Annotate, AnnotateError, AnnotatorConfig, GeminiAnnotator};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;
use serde_json::Value;

fn offline_config(key_var: &str) -> AnnotatorConfig {
  AnnotatorConfig {
    // Unroutable; no test below may reach the network.
    base_url: "http://127.0.0.1:9".into(),
    timeout_secs: 1,
    api_key_vars: vec![key_var.into()],
    ..AnnotatorConfig::default()
  }
}

#[test]
fn construction_does_not_need_a_key() {
  let a = GeminiAnnotator::new(offline_config("DROIDLOG_TEST_KEY_NEVER_SET_A"));
  assert!(a.is_ok(), "missing credential must only fail at first use");
}

#[tokio::test]
async fn missing_key_fails_at_call_time() {
  let a = GeminiAnnotator::new(offline_config("DROIDLOG_TEST_KEY_NEVER_SET_B")).unwrap();
  let err = a
    .annotate("E AndroidRuntime: FATAL EXCEPTION: main", "FATAL")
    .await
    .unwrap_err();
  assert!(matches!(err, AnnotateError::MissingCredential(_)));
  assert!(
    err.to_string().contains("DROIDLOG_TEST_KEY_NEVER_SET_B"),
    "error should name the variable: {}",
    err
  );
}

// ---------------------------------------------------------------------------
// Local stand-in for the generateContent endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Seen {
  path: String,
  api_key: Option<String>,
  body: Value,
}

#[derive(Clone)]
struct Upstream {
  status: StatusCode,
  reply: String,
  seen: Arc<Mutex<Vec<Seen>>>,
}

async fn record(
  State(up): State<Upstream>,
  uri: Uri,
  headers: HeaderMap,
  body: String,
) -> (StatusCode, String) {
  let api_key = headers
    .get("x-goog-api-key")
    .and_then(|v| v.to_str().ok())
    .map(str::to_string);
  up.seen.lock().unwrap().push(Seen {
    path: uri.path().to_string(),
    api_key,
    body: serde_json::from_str(&body).unwrap_or(Value::Null),
  });
  (up.status, up.reply.clone())
}

/// Serve one canned reply on an ephemeral port; returns the base url and the request log.
async fn upstream(status: StatusCode, reply: &str) -> (String, Arc<Mutex<Vec<Seen>>>) {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let app = Router::new().fallback(record).with_state(Upstream {
    status,
    reply: reply.to_string(),
    seen: seen.clone(),
  });
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });
  (format!("http://{}/v1beta", addr), seen)
}

/// Annotator pointed at `base_url`, with a key set under a test-only variable.
fn keyed(base_url: String, key_var: &str, key: &str) -> GeminiAnnotator {
  std::env::set_var(key_var, key);
  GeminiAnnotator::new(AnnotatorConfig {
    model: "test-model".into(),
    base_url,
    timeout_secs: 5,
    api_key_vars: vec![key_var.into()],
    ..AnnotatorConfig::default()
  })
  .unwrap()
}

#[tokio::test]
async fn posts_prompt_and_key_to_generate_content() {
  let reply = r###"{"candidates":[{"content":{"parts":[{"text":"## Root cause\n"},{"text":"main thread blocked"}]}}]}"###;
  let (base_url, seen) = upstream(StatusCode::OK, reply).await;
  let a = keyed(base_url, "DROIDLOG_TEST_KEY_UPSTREAM_OK", "  key-123  ");

  let text = a
    .annotate("E ActivityManager: ANR in com.example", "ANR")
    .await
    .unwrap();
  assert_eq!(text, "## Root cause\nmain thread blocked");

  let seen = seen.lock().unwrap().clone();
  assert_eq!(seen.len(), 1);
  let req = &seen[0];
  assert_eq!(req.path, "/v1beta/models/test-model:generateContent");
  assert_eq!(req.api_key.as_deref(), Some("key-123"));

  let prompt = req.body["contents"][0]["parts"][0]["text"].as_str().unwrap();
  assert!(prompt.contains("Analyze the following Android ANR log snippet."));
  assert!(prompt.contains("E ActivityManager: ANR in com.example"));
  assert_eq!(req.body["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
}

#[tokio::test]
async fn long_context_is_cut_before_sending() {
  let reply = r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#;
  let (base_url, seen) = upstream(StatusCode::OK, reply).await;
  std::env::set_var("DROIDLOG_TEST_KEY_UPSTREAM_CUT", "k");
  let a = GeminiAnnotator::new(AnnotatorConfig {
    base_url,
    timeout_secs: 5,
    max_context_chars: 8,
    api_key_vars: vec!["DROIDLOG_TEST_KEY_UPSTREAM_CUT".into()],
    ..AnnotatorConfig::default()
  })
  .unwrap();

  a.annotate("01234567TAIL", "EXCEPTION").await.unwrap();

  let seen = seen.lock().unwrap().clone();
  let prompt = seen[0].body["contents"][0]["parts"][0]["text"].as_str().unwrap();
  assert!(prompt.contains("01234567"));
  assert!(!prompt.contains("TAIL"));
}

#[tokio::test]
async fn non_success_status_is_upstream_error() {
  let (base_url, _seen) = upstream(StatusCode::INTERNAL_SERVER_ERROR, "quota exhausted").await;
  let a = keyed(base_url, "DROIDLOG_TEST_KEY_UPSTREAM_500", "k");

  let err = a.annotate("x Exception: y", "EXCEPTION").await.unwrap_err();
  match err {
    AnnotateError::Upstream { status, body } => {
      assert_eq!(status, 500);
      assert_eq!(body, "quota exhausted");
    }
    other => panic!("unexpected error {:?}", other),
  }
}

#[tokio::test]
async fn empty_candidate_falls_back_to_placeholder() {
  let reply = r#"{"candidates":[{"content":{"parts":[]}}]}"#;
  let (base_url, _seen) = upstream(StatusCode::OK, reply).await;
  let a = keyed(base_url, "DROIDLOG_TEST_KEY_UPSTREAM_EMPTY", "k");

  let text = a.annotate("FATAL EXCEPTION: main", "FATAL").await.unwrap();
  assert_eq!(text, EMPTY_ANALYSIS);
}

#[tokio::test]
async fn unparseable_reply_is_decode_error() {
  let (base_url, _seen) = upstream(StatusCode::OK, "<html>not json</html>").await;
  let a = keyed(base_url, "DROIDLOG_TEST_KEY_UPSTREAM_HTML", "k");

  let err = a.annotate("FATAL EXCEPTION: main", "FATAL").await.unwrap_err();
  assert!(matches!(err, AnnotateError::Decode(_)), "got {:?}", err);
}
