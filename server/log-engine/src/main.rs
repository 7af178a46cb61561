//! Binary entrypoint: read a log dump (file or stdin), write incidents to stdout.
//!
//! Output is one Incident JSON object per line, or a short human-readable
//! listing with `--format text`. Logs go to stderr.

use clap::{Parser, ValueEnum};
use log_engine::sample::{SAMPLE_LOG, SAMPLE_NAME};
use log_engine::{EngineError, Incident, Segmenter, SegmenterConfig};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
  Json,
  Text,
}

#[derive(Debug, Parser)]
#[command(name = "log-engine", about = "Flag crashes, ANRs and exceptions in an Android log dump")]
struct Args {
  /// Log file to scan; "-" or nothing reads stdin.
  path: Option<PathBuf>,

  /// Scan the built-in sample dumpstate instead of a file.
  #[arg(long, conflicts_with = "path")]
  sample: bool,

  #[arg(long, value_enum, default_value = "json")]
  format: Format,

  /// Lines captured before each trigger line.
  #[arg(long, default_value_t = SegmenterConfig::default().lookback_lines)]
  lookback: usize,

  /// Lines captured from each trigger line onward.
  #[arg(long, default_value_t = SegmenterConfig::default().lookahead_lines)]
  lookahead: usize,

  /// Lines after a trigger that are never classified again.
  #[arg(long, default_value_t = SegmenterConfig::default().suppression_window)]
  suppress: usize,
}

fn main() {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("log_engine=info,warn")),
    )
    .init();

  let args = Args::parse();
  if let Err(e) = run(&args) {
    let _ = writeln!(io::stderr(), "log-engine: {}", e);
    std::process::exit(1);
  }
}

fn run(args: &Args) -> Result<(), EngineError> {
  let (source_name, text) = read_source(args)?;

  let segmenter = Segmenter::new(SegmenterConfig {
    lookback_lines: args.lookback,
    lookahead_lines: args.lookahead,
    suppression_window: args.suppress,
    ..SegmenterConfig::default()
  });
  let incidents = segmenter.segment(&text);
  info!(source = %source_name, incidents = incidents.len(), "scan complete");

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  match args.format {
    Format::Json => {
      for incident in &incidents {
        serde_json::to_writer(&mut out, incident)?;
        writeln!(out)?;
      }
    }
    Format::Text => write_text(&mut out, &source_name, &incidents, args.lookback)?,
  }
  out.flush()?;
  Ok(())
}

/// Load the input as text. Invalid UTF-8 is replaced rather than rejected.
fn read_source(args: &Args) -> Result<(String, String), EngineError> {
  if args.sample {
    return Ok((SAMPLE_NAME.to_string(), SAMPLE_LOG.to_string()));
  }

  let mut bytes = Vec::new();
  let name = match &args.path {
    Some(p) if p.as_os_str() != "-" => {
      let name = p.display().to_string();
      bytes = std::fs::read(p).map_err(|e| EngineError::io(&name, e))?;
      name
    }
    _ => {
      io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|e| EngineError::io("stdin", e))?;
      "stdin".to_string()
    }
  };
  Ok((name, String::from_utf8_lossy(&bytes).into_owned()))
}

fn write_text(
  out: &mut impl Write,
  source_name: &str,
  incidents: &[Incident],
  lookback: usize,
) -> Result<(), EngineError> {
  if incidents.is_empty() {
    writeln!(out, "{}: no major issues detected (FATAL, ANR, Exception)", source_name)?;
    return Ok(());
  }

  writeln!(out, "{}: {} issue(s) detected", source_name, incidents.len())?;
  for incident in incidents {
    let first = incident.context_first_line(lookback);
    let last = first + incident.context.split('\n').count() - 1;
    writeln!(
      out,
      "[{}] {:<9} line {:>6}  {}  {}",
      incident.id,
      incident.category.as_str(),
      incident.line_number,
      incident.timestamp.as_deref().unwrap_or("-"),
      incident.process_label.as_deref().unwrap_or("-"),
    )?;
    writeln!(out, "    {}", incident.summary)?;
    writeln!(out, "    context: lines {}-{}", first, last)?;
  }
  Ok(())
}
