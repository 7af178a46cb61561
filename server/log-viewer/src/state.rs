//! Shared service state: the currently loaded log and its outcomes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log_engine::{Incident, IncidentId, Segmenter};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ViewerConfig;
use crate::outcomes::OutcomeStore;

/// One segmentation of one uploaded source. Replaced wholesale by the next upload.
#[derive(Debug)]
pub struct ParseRun {
  pub run_id: Uuid,
  pub source_name: String,
  pub parsed_at: DateTime<Utc>,
  pub line_count: usize,
  pub incidents: Vec<Incident>,
  /// Owned by the run so late completions from a discarded run land nowhere visible.
  pub outcomes: Arc<OutcomeStore>,
}

impl ParseRun {
  pub fn new(source_name: String, line_count: usize, incidents: Vec<Incident>) -> Self {
    Self {
      run_id: Uuid::new_v4(),
      source_name,
      parsed_at: Utc::now(),
      line_count,
      incidents,
      outcomes: Arc::new(OutcomeStore::new()),
    }
  }

  pub fn find(&self, id: &IncidentId) -> Option<&Incident> {
    self.incidents.iter().find(|i| &i.id == id)
  }
}

pub struct AppState<A> {
  pub config: ViewerConfig,
  pub segmenter: Segmenter,
  pub annotator: A,
  current: RwLock<Option<Arc<ParseRun>>>,
}

impl<A> AppState<A> {
  pub fn new(config: ViewerConfig, segmenter: Segmenter, annotator: A) -> Self {
    Self {
      config,
      segmenter,
      annotator,
      current: RwLock::new(None),
    }
  }

  pub async fn current(&self) -> Option<Arc<ParseRun>> {
    self.current.read().await.clone()
  }

  /// Install a fresh run, discarding the previous one and its outcomes.
  pub async fn replace(&self, run: ParseRun) -> Arc<ParseRun> {
    let run = Arc::new(run);
    *self.current.write().await = Some(Arc::clone(&run));
    run
  }

  /// Drop the loaded run. `false` if nothing was loaded.
  pub async fn close(&self) -> bool {
    self.current.write().await.take().is_some()
  }
}
