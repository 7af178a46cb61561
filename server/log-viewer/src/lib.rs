//! DroidLog Viewer Service
//!
//! HTTP front for the segmentation engine: one loaded log at a time, incident
//! list and detail, and per-incident background analysis.
//! Bind to 127.0.0.1 by default (local use).

mod config;
mod error;
mod handlers;
pub mod markup;
mod outcomes;
mod state;
mod types;

use std::sync::Arc;

use annotator::Annotate;
use axum::{
  extract::DefaultBodyLimit,
  routing::{get, post},
  Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ViewerConfig;
pub use error::{ApiError, ConfigError};
pub use handlers::{analyze, close_log, get_incident, health, list_incidents, load_sample, upload_log};
pub use outcomes::{AnnotationState, OutcomeStore};
pub use state::{AppState, ParseRun};
pub use types::{AnalyzeAccepted, IncidentDetail, IncidentListItem, RunSummary, UploadQuery, NO_ISSUES_MESSAGE};

/// Build the service router over shared state.
pub fn router<A>(state: Arc<AppState<A>>) -> Router
where
  A: Annotate + 'static,
{
  let body_limit = state.config.max_upload_bytes;
  Router::new()
    .route("/health", get(health))
    .route("/logs", post(upload_log::<A>).delete(close_log::<A>))
    .route("/logs/sample", post(load_sample::<A>))
    .route("/incidents", get(list_incidents::<A>))
    .route("/incidents/:id", get(get_incident::<A>))
    .route("/incidents/:id/analyze", post(analyze::<A>))
    .layer(DefaultBodyLimit::max(body_limit))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
