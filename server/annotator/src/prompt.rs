//! Prompt construction for incident analysis.

/// Cut `context` to at most `max_chars` characters, on a char boundary.
pub fn truncate_context(context: &str, max_chars: usize) -> &str {
  match context.char_indices().nth(max_chars) {
    Some((byte_idx, _)) => &context[..byte_idx],
    None => context,
  }
}

/// Build the analysis prompt for one incident. `context` should already be truncated.
pub fn build_prompt(context: &str, category: &str) -> String {
  format!(
    "You are an expert Android System Engineer.\n\
     Analyze the following Android {category} log snippet.\n\
     \n\
     1. Identify the root cause (what specific exception or blockage occurred).\n\
     2. If it is an ANR, explain what might be blocking the main thread.\n\
     3. If it is a Crash, explain the exception and the likely culprit in the code.\n\
     4. Suggest a potential fix or debugging step.\n\
     \n\
     Format the output in clean Markdown. Keep it concise but technical.\n\
     \n\
     Log Snippet:\n\
     ```\n\
     {context}\n\
     ```\n\
     (Note: Snippet might be truncated)\n"
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_context_untouched() {
    assert_eq!(truncate_context("abc", 10), "abc");
    assert_eq!(truncate_context("", 10), "");
    assert_eq!(truncate_context("abc", 3), "abc");
  }

  #[test]
  fn long_context_cut_to_limit() {
    let ctx = "x".repeat(12_000);
    assert_eq!(truncate_context(&ctx, 10_000).len(), 10_000);
  }

  #[test]
  fn multibyte_cut_stays_on_boundary() {
    let ctx = "日本語".repeat(5);
    let cut = truncate_context(&ctx, 4);
    assert_eq!(cut, "日本語日");
  }

  #[test]
  fn prompt_embeds_category_and_snippet() {
    let p = build_prompt("E AndroidRuntime: FATAL EXCEPTION: main", "FATAL");
    assert!(p.contains("Android FATAL log snippet"));
    assert!(p.contains("```\nE AndroidRuntime: FATAL EXCEPTION: main\n```"));
    assert!(p.contains("blocking the main thread"));
  }
}
