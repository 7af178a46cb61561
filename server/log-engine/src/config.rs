//! Segmenter configuration with sane defaults.

/// Tunable window sizes for incident capture.
///
/// The defaults are fixed heuristics, not derived from stack depth or blank-line
/// boundaries. Changing them changes which incidents are reported.
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
  /// Lines captured before the trigger line.
  pub lookback_lines: usize,
  /// Lines captured from the trigger line onward (trigger included).
  pub lookahead_lines: usize,
  /// Lines after a trigger that are walked but never classified.
  pub suppression_window: usize,
  /// Max characters kept in an incident summary.
  pub summary_max_chars: usize,
}

impl Default for SegmenterConfig {
  fn default() -> Self {
    Self {
      lookback_lines: 5,
      lookahead_lines: 60,
      suppression_window: 20,
      summary_max_chars: 200,
    }
  }
}
