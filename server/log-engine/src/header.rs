//! Positional metadata extraction from a trigger line.
//!
//! Hand-coded for the threadtime-ish layout
//! `MM-DD HH:MM:SS.mmm PID TID LEVEL TAG: message`. Lines that do not fit
//! simply leave the fields empty.

/// Leading header fields pulled from a trigger line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
  pub timestamp: Option<String>,
  pub process_label: Option<String>,
}

/// Extract timestamp (tokens 0 and 1) and process label (token 4).
///
/// - timestamp only when the line has more than 2 tokens
/// - process label only when the line has more than 4 tokens, one trailing ':' stripped
pub fn extract(line: &str) -> Header {
  let tokens: Vec<&str> = line.split_whitespace().collect();

  let timestamp = if tokens.len() > 2 {
    Some(format!("{} {}", tokens[0], tokens[1]))
  } else {
    None
  };

  let process_label = if tokens.len() > 4 {
    let tok = tokens[4];
    Some(tok.strip_suffix(':').unwrap_or(tok).to_string())
  } else {
    None
  };

  Header {
    timestamp,
    process_label,
  }
}

/// Trim the line and cut it to at most `max_chars` characters (pure prefix, no ellipsis).
pub fn summarize(line: &str, max_chars: usize) -> String {
  line.trim().chars().take(max_chars).collect()
}
