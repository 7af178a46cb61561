//! Minimal markdown-to-HTML for analysis text.
//!
//! Supports `#`/`##`/`###` headings, fenced code blocks, `- ` list items,
//! `**bold**`, `` `code` `` and one paragraph per non-blank line. Everything
//! else is escaped text. Not a general markdown parser.

/// Render the restricted markdown subset to an HTML fragment.
pub fn render(markdown: &str) -> String {
  let mut out = String::with_capacity(markdown.len() + 64);
  let mut code: Option<Vec<&str>> = None;
  let mut in_list = false;

  for line in markdown.lines() {
    let trimmed = line.trim();

    if trimmed.starts_with("```") {
      close_list(&mut out, &mut in_list);
      match code.take() {
        Some(buf) => push_code(&mut out, &buf),
        None => code = Some(Vec::new()),
      }
      continue;
    }
    if let Some(buf) = code.as_mut() {
      buf.push(line);
      continue;
    }

    if let Some(item) = trimmed.strip_prefix("- ") {
      if !in_list {
        out.push_str("<ul>\n");
        in_list = true;
      }
      push_tag(&mut out, "li", &inline(item));
      continue;
    }
    close_list(&mut out, &mut in_list);

    if let Some(h) = trimmed.strip_prefix("### ") {
      push_tag(&mut out, "h3", &inline(h));
    } else if let Some(h) = trimmed.strip_prefix("## ") {
      push_tag(&mut out, "h2", &inline(h));
    } else if let Some(h) = trimmed.strip_prefix("# ") {
      push_tag(&mut out, "h1", &inline(h));
    } else if !trimmed.is_empty() {
      push_tag(&mut out, "p", &inline(trimmed));
    }
  }

  // Unclosed fence: keep the content rather than dropping it.
  if let Some(buf) = code {
    push_code(&mut out, &buf);
  }
  close_list(&mut out, &mut in_list);
  out
}

fn push_tag(out: &mut String, tag: &str, inner: &str) {
  out.push('<');
  out.push_str(tag);
  out.push('>');
  out.push_str(inner);
  out.push_str("</");
  out.push_str(tag);
  out.push_str(">\n");
}

fn push_code(out: &mut String, lines: &[&str]) {
  out.push_str("<pre><code>");
  out.push_str(&escape(&lines.join("\n")));
  out.push_str("</code></pre>\n");
}

fn close_list(out: &mut String, in_list: &mut bool) {
  if *in_list {
    out.push_str("</ul>\n");
    *in_list = false;
  }
}

/// Bold and inline code; unmatched markers stay literal.
fn inline(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut rest = text;

  while !rest.is_empty() {
    if let Some(after) = rest.strip_prefix("**") {
      if let Some(end) = after.find("**") {
        out.push_str("<strong>");
        out.push_str(&inline(&after[..end]));
        out.push_str("</strong>");
        rest = &after[end + 2..];
        continue;
      }
    }
    if let Some(after) = rest.strip_prefix('`') {
      if let Some(end) = after.find('`') {
        out.push_str("<code>");
        out.push_str(&escape(&after[..end]));
        out.push_str("</code>");
        rest = &after[end + 1..];
        continue;
      }
    }

    let Some(ch) = rest.chars().next() else { break };
    push_escaped(&mut out, ch);
    rest = &rest[ch.len_utf8()..];
  }
  out
}

fn escape(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    push_escaped(&mut out, ch);
  }
  out
}

fn push_escaped(out: &mut String, ch: char) {
  match ch {
    '&' => out.push_str("&amp;"),
    '<' => out.push_str("&lt;"),
    '>' => out.push_str("&gt;"),
    '"' => out.push_str("&quot;"),
    '\'' => out.push_str("&#39;"),
    _ => out.push(ch),
  }
}
