//! # Stripper Module
//!
//! Detects and removes a pre-existing leading comment block from file text.
//!
//! The stripper only looks at the start of the text and uses line-level
//! heuristics. When it cannot be sure where a comment ends (an opener with no
//! closer) it leaves the text alone: keeping a stale header in the body is
//! recoverable, deleting real content is not.

use crate::styles::StyleFamily;

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_MARKER: &str = "//";
const SHARP_MARKER: char = '#';
const TRIPLE_QUOTES: [&str; 2] = ["\"\"\"", "'''"];

/// Result of trying to strip a leading comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome<'a> {
  /// A leading comment was removed; holds the text after it.
  Removed(&'a str),
  /// Nothing was removed; holds the input with leading newlines trimmed.
  Unchanged(&'a str),
}

impl<'a> StripOutcome<'a> {
  /// The text that remains, with leading newlines trimmed.
  pub const fn remainder(&self) -> &'a str {
    match *self {
      Self::Removed(rest) | Self::Unchanged(rest) => rest,
    }
  }

  pub const fn is_removed(&self) -> bool {
    matches!(self, Self::Removed(_))
  }
}

/// Strips the leading comment block of `text` according to `family`.
///
/// `text` must already have any BOM and shebang line removed.
pub fn strip_leading_comment(text: &str, family: StyleFamily) -> StripOutcome<'_> {
  let working = trim_leading_newlines(text);
  if working.is_empty() {
    return StripOutcome::Unchanged(working);
  }

  match family {
    StyleFamily::Block => strip_block(working),
    StyleFamily::Sharp => strip_sharp(working),
  }
}

/// Trims any leading run of `\r` and `\n` characters.
pub fn trim_leading_newlines(text: &str) -> &str {
  text.trim_start_matches(['\r', '\n'])
}

/// Iterates over the lines of `text`, each with its terminator.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. The last line may have no
/// terminator.
pub fn lines_with_endings(text: &str) -> LinesWithEndings<'_> {
  LinesWithEndings { rest: text }
}

/// Iterator returned by [`lines_with_endings`].
#[derive(Debug, Clone)]
pub struct LinesWithEndings<'a> {
  rest: &'a str,
}

impl<'a> Iterator for LinesWithEndings<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    if self.rest.is_empty() {
      return None;
    }

    let end = match self.rest.find(['\r', '\n']) {
      Some(idx) if self.rest[idx..].starts_with("\r\n") => idx + 2,
      Some(idx) => idx + 1,
      None => self.rest.len(),
    };
    let (line, rest) = self.rest.split_at(end);
    self.rest = rest;
    Some(line)
  }
}

fn strip_block(text: &str) -> StripOutcome<'_> {
  if let Some(after_open) = text.strip_prefix(BLOCK_OPEN) {
    // The closer is searched after the opener, so "/*/" stays open.
    return match after_open.find(BLOCK_CLOSE) {
      Some(end) => removed(&after_open[end + BLOCK_CLOSE.len()..]),
      None => StripOutcome::Unchanged(text),
    };
  }

  if text.starts_with(LINE_MARKER) {
    return strip_line_run(text, |line| line.starts_with(LINE_MARKER));
  }

  StripOutcome::Unchanged(text)
}

fn strip_sharp(text: &str) -> StripOutcome<'_> {
  if let Some(quote) = TRIPLE_QUOTES.iter().find(|quote| text.starts_with(**quote)) {
    let body = &text[quote.len()..];
    return match body.find(quote) {
      Some(end) => removed(&body[end + quote.len()..]),
      None => StripOutcome::Unchanged(text),
    };
  }

  strip_line_run(text, |line| line.starts_with(SHARP_MARKER))
}

/// Consumes the maximal run of comment or blank lines at the start of `text`.
///
/// `is_comment` receives each line with leading whitespace removed.
fn strip_line_run(text: &str, is_comment: impl Fn(&str) -> bool) -> StripOutcome<'_> {
  let mut consumed = 0;
  for line in lines_with_endings(text) {
    let stripped = line.trim_start();
    if stripped.is_empty() || is_comment(stripped) {
      consumed += line.len();
    } else {
      break;
    }
  }

  if consumed == 0 {
    return StripOutcome::Unchanged(text);
  }
  removed(&text[consumed..])
}

fn removed(rest: &str) -> StripOutcome<'_> {
  StripOutcome::Removed(trim_leading_newlines(rest))
}
