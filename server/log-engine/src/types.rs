//! Core types for the segmentation engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category enum (closed set)
// ---------------------------------------------------------------------------

/// Incident category, ordered by classification priority (most specific first).
///
/// `Unknown` completes the label set; the segmenter never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
  Fatal,
  Anr,
  Exception,
  Error,
  Unknown,
}

impl Category {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Fatal => "FATAL",
      Self::Anr => "ANR",
      Self::Exception => "EXCEPTION",
      Self::Error => "ERROR",
      Self::Unknown => "UNKNOWN",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Incident id
// ---------------------------------------------------------------------------

/// Run-scoped incident identifier ("inc-1", "inc-2", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(pub String);

impl IncidentId {
  pub fn from_seq(seq: u64) -> Self {
    Self(format!("inc-{}", seq))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for IncidentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One detected anomaly. Immutable once produced by a parse run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
  pub id: IncidentId,
  pub category: Category,
  /// 1-based line of the trigger within the original input.
  pub line_number: usize,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub timestamp: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub process_label: Option<String>,
  pub summary: String,
  /// Original lines around the trigger, joined with '\n'.
  pub context: String,
}

impl Incident {
  /// Number of the first line captured in `context` (1-based).
  pub fn context_first_line(&self, lookback: usize) -> usize {
    self.line_number.saturating_sub(lookback).max(1)
  }
}
