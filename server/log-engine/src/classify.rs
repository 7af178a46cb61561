//! Trigger-line classification rules.

use crate::types::Category;

const FATAL_MARKER: &str = "FATAL EXCEPTION:";
const ANR_MARKER: &str = "ANR in";
const EXCEPTION_MARKER: &str = "Exception:";
const UNCAUGHT_ERROR_MARKER: &str = " uncaught error";

/// Classify one line. Rules are tried FATAL, ANR, EXCEPTION, ERROR; first match wins.
///
/// A fatal-exception line also contains "Exception:", so the order is load-bearing.
pub fn classify(line: &str) -> Option<Category> {
  if line.contains(FATAL_MARKER) {
    Some(Category::Fatal)
  } else if line.contains(ANR_MARKER) {
    Some(Category::Anr)
  } else if line.contains(EXCEPTION_MARKER) {
    Some(Category::Exception)
  } else if has_uncaught_error(line) {
    Some(Category::Error)
  } else {
    None
  }
}

/// Case-insensitive " uncaught error": the preceding boundary is a literal space.
fn has_uncaught_error(line: &str) -> bool {
  line.to_ascii_lowercase().contains(UNCAUGHT_ERROR_MARKER)
}
