//! Per-incident annotation outcomes for one parse run.

use std::collections::HashMap;

use log_engine::IncidentId;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::markup;

/// Where one incident's analysis stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnnotationState {
  Loading,
  Failed { error: String },
  Ready { result: String, html: String },
}

impl AnnotationState {
  pub fn is_loading(&self) -> bool {
    matches!(self, Self::Loading)
  }
}

/// Map of incident id to outcome. Only the call that won `begin` writes the slot.
#[derive(Debug, Default)]
pub struct OutcomeStore {
  slots: Mutex<HashMap<IncidentId, AnnotationState>>,
}

impl OutcomeStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Claim the slot for a new call. `false` if one is already in flight.
  ///
  /// A finished (ready or failed) slot can be claimed again; the new call replaces it.
  pub async fn begin(&self, id: &IncidentId) -> bool {
    let mut slots = self.slots.lock().await;
    if slots.get(id).is_some_and(AnnotationState::is_loading) {
      return false;
    }
    slots.insert(id.clone(), AnnotationState::Loading);
    true
  }

  /// Record the terminal state of the in-flight call.
  pub async fn finish(&self, id: &IncidentId, outcome: Result<String, String>) {
    let state = match outcome {
      Ok(result) => AnnotationState::Ready {
        html: markup::render(&result),
        result,
      },
      Err(error) => AnnotationState::Failed { error },
    };
    self.slots.lock().await.insert(id.clone(), state);
  }

  pub async fn get(&self, id: &IncidentId) -> Option<AnnotationState> {
    self.slots.lock().await.get(id).cloned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn id(n: u64) -> IncidentId {
    IncidentId::from_seq(n)
  }

  #[tokio::test]
  async fn second_begin_is_refused_while_loading() {
    let store = OutcomeStore::new();
    assert!(store.begin(&id(1)).await);
    assert!(!store.begin(&id(1)).await);
    // Other incidents are independent.
    assert!(store.begin(&id(2)).await);
    assert_eq!(store.get(&id(2)).await, Some(AnnotationState::Loading));
    assert_eq!(store.get(&id(3)).await, None);
  }

  #[tokio::test]
  async fn finish_renders_result() {
    let store = OutcomeStore::new();
    store.begin(&id(1)).await;
    store.finish(&id(1), Ok("## Cause\n- **NPE**".into())).await;
    match store.get(&id(1)).await {
      Some(AnnotationState::Ready { result, html }) => {
        assert_eq!(result, "## Cause\n- **NPE**");
        assert!(html.contains("<h2>Cause</h2>"));
        assert!(html.contains("<li><strong>NPE</strong></li>"));
      }
      other => panic!("unexpected state {:?}", other),
    }
  }

  #[tokio::test]
  async fn failure_stays_on_its_incident() {
    let store = OutcomeStore::new();
    store.begin(&id(1)).await;
    store.begin(&id(2)).await;
    store.finish(&id(1), Err("Failed to analyze: boom".into())).await;
    assert_eq!(
      store.get(&id(1)).await,
      Some(AnnotationState::Failed {
        error: "Failed to analyze: boom".into()
      })
    );
    assert_eq!(store.get(&id(2)).await, Some(AnnotationState::Loading));
    assert_eq!(store.get(&id(3)).await, None);
  }

  #[tokio::test]
  async fn finished_slot_can_be_retried() {
    let store = OutcomeStore::new();
    store.begin(&id(1)).await;
    store.finish(&id(1), Err("x".into())).await;
    assert!(store.begin(&id(1)).await);
    assert_eq!(store.get(&id(1)).await, Some(AnnotationState::Loading));
  }

  #[test]
  fn state_json_is_tagged() {
    let json = serde_json::to_value(AnnotationState::Failed { error: "e".into() }).unwrap();
    assert_eq!(json, serde_json::json!({"status": "failed", "error": "e"}));
  }
}
