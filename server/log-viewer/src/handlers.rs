//! HTTP handlers for the viewer service.

use std::sync::Arc;
use std::time::Duration;

use annotator::Annotate;
use axum::{
  body::Bytes,
  extract::{Path, Query, State},
  http::StatusCode,
  Json,
};
use log_engine::sample::{SAMPLE_LOG, SAMPLE_NAME};
use log_engine::IncidentId;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::outcomes::AnnotationState;
use crate::state::{AppState, ParseRun};
use crate::types::{AnalyzeAccepted, IncidentDetail, RunSummary, UploadQuery};

pub async fn health() -> &'static str {
  "ok"
}

/// Segment an uploaded log and make it the loaded run.
pub async fn upload_log<A>(
  State(state): State<Arc<AppState<A>>>,
  Query(query): Query<UploadQuery>,
  body: Bytes,
) -> Result<Json<RunSummary>, ApiError> {
  let name = query
    .name
    .filter(|n| !n.trim().is_empty())
    .unwrap_or_else(|| "upload.log".to_string());
  // Binary junk is tolerated: it just never matches a rule.
  let text = String::from_utf8_lossy(&body).into_owned();
  let run = ingest(&state, name, text).await?;
  Ok(Json(RunSummary::from(run.as_ref())))
}

/// Load the built-in sample dumpstate as if it had been uploaded.
pub async fn load_sample<A>(
  State(state): State<Arc<AppState<A>>>,
) -> Result<Json<RunSummary>, ApiError> {
  let run = ingest(&state, SAMPLE_NAME.to_string(), SAMPLE_LOG.to_string()).await?;
  Ok(Json(RunSummary::from(run.as_ref())))
}

/// Forget the loaded log, its incidents and their analyses.
pub async fn close_log<A>(State(state): State<Arc<AppState<A>>>) -> Result<StatusCode, ApiError> {
  if state.close().await {
    info!("log closed");
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::no_log_loaded())
  }
}

pub async fn list_incidents<A>(
  State(state): State<Arc<AppState<A>>>,
) -> Result<Json<RunSummary>, ApiError> {
  let run = state.current().await.ok_or_else(ApiError::no_log_loaded)?;
  Ok(Json(RunSummary::from(run.as_ref())))
}

pub async fn get_incident<A>(
  State(state): State<Arc<AppState<A>>>,
  Path(id): Path<String>,
) -> Result<Json<IncidentDetail>, ApiError> {
  let run = state.current().await.ok_or_else(ApiError::no_log_loaded)?;
  let id = IncidentId(id);
  let incident = run.find(&id).cloned().ok_or_else(|| unknown_incident(&id))?;
  let annotation = run.outcomes.get(&id).await;
  Ok(Json(IncidentDetail {
    run_id: run.run_id,
    incident,
    annotation,
  }))
}

/// Start analysis of one incident in the background.
///
/// 409 while a call for the same incident is still running.
pub async fn analyze<A>(
  State(state): State<Arc<AppState<A>>>,
  Path(id): Path<String>,
) -> Result<(StatusCode, Json<AnalyzeAccepted>), ApiError>
where
  A: Annotate + 'static,
{
  let run = state.current().await.ok_or_else(ApiError::no_log_loaded)?;
  let id = IncidentId(id);
  let incident = run.find(&id).cloned().ok_or_else(|| unknown_incident(&id))?;

  if !run.outcomes.begin(&id).await {
    return Err(ApiError::conflict(format!(
      "analysis of {} already in progress",
      id
    )));
  }

  let outcomes = Arc::clone(&run.outcomes);
  let task_state = Arc::clone(&state);
  let timeout_secs = state.config.analyze_timeout_secs;
  info!(incident = %id, category = %incident.category, "analysis started");

  tokio::spawn(async move {
    let call = task_state
      .annotator
      .annotate(&incident.context, incident.category.as_str());
    let outcome = match tokio::time::timeout(Duration::from_secs(timeout_secs), call).await {
      Ok(Ok(text)) => Ok(text),
      Ok(Err(e)) => {
        warn!(incident = %incident.id, "analysis failed: {}", e);
        Err(format!("Failed to analyze: {}", e))
      }
      Err(_) => {
        warn!(incident = %incident.id, "analysis timed out after {}s", timeout_secs);
        Err(format!("Failed to analyze: timed out after {}s", timeout_secs))
      }
    };
    outcomes.finish(&incident.id, outcome).await;
  });

  Ok((
    StatusCode::ACCEPTED,
    Json(AnalyzeAccepted {
      run_id: run.run_id,
      incident_id: id,
      annotation: AnnotationState::Loading,
    }),
  ))
}

/// Run the segmenter off the async workers and install the result.
async fn ingest<A>(
  state: &AppState<A>,
  source_name: String,
  text: String,
) -> Result<Arc<ParseRun>, ApiError> {
  let segmenter = state.segmenter.clone();
  let (line_count, incidents) = tokio::task::spawn_blocking(move || {
    let line_count = text.split('\n').count();
    (line_count, segmenter.segment(&text))
  })
  .await
  .map_err(|e| {
    tracing::error!("segmentation task failed: {}", e);
    ApiError::internal("segmentation failed")
  })?;

  info!(
    source = %source_name,
    lines = line_count,
    incidents = incidents.len(),
    "log parsed"
  );
  Ok(state.replace(ParseRun::new(source_name, line_count, incidents)).await)
}

fn unknown_incident(id: &IncidentId) -> ApiError {
  ApiError::not_found(format!("no incident {} in the loaded log", id))
}
