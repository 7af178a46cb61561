//! Core engine: single forward scan that turns raw log text into incidents.

use crate::classify;
use crate::config::SegmenterConfig;
use crate::header;
use crate::types::*;

/// The log segmenter. Holds only configuration; every call is an independent parse run.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
  config: SegmenterConfig,
}

impl Segmenter {
  pub fn new(config: SegmenterConfig) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(SegmenterConfig::default())
  }

  /// Segment `text` into incidents ordered by line number.
  ///
  /// Never fails: unmatched or malformed lines are skipped.
  pub fn segment(&self, text: &str) -> Vec<Incident> {
    // Split on '\n' only so blank lines (and a trailing one) keep numbering 1:1 with the file.
    let lines: Vec<&str> = text.split('\n').collect();
    let mut incidents = Vec::new();
    let mut next_seq: u64 = 1;
    let mut suppress_until: usize = 0;

    for (i, line) in lines.iter().enumerate() {
      if i < suppress_until {
        continue;
      }

      let category = match classify::classify(line) {
        Some(c) => c,
        None => continue,
      };

      let start = i.saturating_sub(self.config.lookback_lines);
      // Trigger line is always inside the window, even with lookahead 0.
      let end = i
        .saturating_add(self.config.lookahead_lines)
        .max(i + 1)
        .min(lines.len());
      let context = lines[start..end].join("\n");

      let meta = header::extract(line);

      incidents.push(Incident {
        id: IncidentId::from_seq(next_seq),
        category,
        line_number: i + 1,
        timestamp: meta.timestamp,
        process_label: meta.process_label,
        summary: header::summarize(line, self.config.summary_max_chars),
        context,
      });
      next_seq += 1;

      suppress_until = i.saturating_add(self.config.suppression_window);
    }

    tracing::debug!(
      lines = lines.len(),
      incidents = incidents.len(),
      "segmentation finished"
    );
    incidents
  }
}

/// Segment with the default windows.
pub fn segment(text: &str) -> Vec<Incident> {
  Segmenter::with_defaults().segment(text)
}
