//! Binary entrypoint for the viewer service.

use std::net::SocketAddr;
use std::sync::Arc;

use annotator::{AnnotatorConfig, GeminiAnnotator};
use log_engine::Segmenter;
use log_viewer::{AppState, ViewerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("log_viewer=info,log_engine=info,annotator=info,tower_http=info,warn")
      }),
    )
    .init();

  let config = ViewerConfig::from_env()?;
  // The API key is looked up per call; a missing key surfaces on the first analysis.
  let annotator = GeminiAnnotator::new(AnnotatorConfig::from_env())?;
  info!(model = %annotator.config().model, "annotator configured");

  let addr = SocketAddr::new(config.bind_addr, config.port);
  let state = Arc::new(AppState::new(config, Segmenter::with_defaults(), annotator));
  let app = log_viewer::router(state);

  info!("log-viewer listening on http://{}", addr);
  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
