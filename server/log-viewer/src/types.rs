//! Request/response types for the viewer service.

use log_engine::{Category, Incident, IncidentId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::outcomes::AnnotationState;
use crate::state::ParseRun;

pub const NO_ISSUES_MESSAGE: &str = "No major issues detected (FATAL, ANR, Exception).";

#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
  /// Display name of the uploaded file.
  #[serde(default)]
  pub name: Option<String>,
}

/// Sidebar entry: everything but the context block.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentListItem {
  pub id: IncidentId,
  pub category: Category,
  pub line_number: usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timestamp: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub process_label: Option<String>,
  pub summary: String,
}

impl From<&Incident> for IncidentListItem {
  fn from(i: &Incident) -> Self {
    Self {
      id: i.id.clone(),
      category: i.category,
      line_number: i.line_number,
      timestamp: i.timestamp.clone(),
      process_label: i.process_label.clone(),
      summary: i.summary.clone(),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
  pub run_id: Uuid,
  pub source_name: String,
  pub parsed_at: String,
  pub line_count: usize,
  pub incident_count: usize,
  pub incidents: Vec<IncidentListItem>,
  /// Set when nothing was detected; an empty result is not an error.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl From<&ParseRun> for RunSummary {
  fn from(run: &ParseRun) -> Self {
    Self {
      run_id: run.run_id,
      source_name: run.source_name.clone(),
      parsed_at: run.parsed_at.to_rfc3339(),
      line_count: run.line_count,
      incident_count: run.incidents.len(),
      incidents: run.incidents.iter().map(IncidentListItem::from).collect(),
      message: run
        .incidents
        .is_empty()
        .then(|| NO_ISSUES_MESSAGE.to_string()),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct IncidentDetail {
  pub run_id: Uuid,
  pub incident: Incident,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub annotation: Option<AnnotationState>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeAccepted {
  pub run_id: Uuid,
  pub incident_id: IncidentId,
  pub annotation: AnnotationState,
}
