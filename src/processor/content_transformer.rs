//! # Content Transformer Module
//!
//! This module splits decoded file text into the parts that must stay in front
//! of the header (byte-order mark and interpreter line) and the remainder, and
//! reassembles a file around a canonical header.

use super::stripper::lines_with_endings;
use crate::styles::StyleFamily;

/// Unicode byte-order mark as it appears in decoded text.
pub const BOM: char = '\u{feff}';

const SHEBANG: &str = "#!";

/// A decoded file split into its preamble and the text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preamble<'a> {
  /// Leading byte-order mark, if the file had one.
  pub bom: bool,
  /// Interpreter line including its terminator, or `""`.
  pub shebang: &'a str,
  /// Everything after the BOM and shebang.
  pub rest: &'a str,
}

/// Splits the BOM and, for the sharp family, the shebang line off `content`.
///
/// The block family never has a shebang detached.
pub fn split_preamble(content: &str, family: StyleFamily) -> Preamble<'_> {
  let (bom, text) = match content.strip_prefix(BOM) {
    Some(rest) => (true, rest),
    None => (false, content),
  };

  if family == StyleFamily::Sharp && text.starts_with(SHEBANG) {
    let line_end = lines_with_endings(text).next().map_or(0, str::len);
    let (shebang, rest) = text.split_at(line_end);
    return Preamble { bom, shebang, rest };
  }

  Preamble {
    bom,
    shebang: "",
    rest: text,
  }
}

/// Builds `bom + shebang + header + body`.
///
/// A shebang without a line terminator gets a `\n` so the header always starts
/// on its own line. An existing terminator of any kind is kept as is.
pub fn compose(preamble: &Preamble<'_>, header: &str, body: &str) -> String {
  let mut out = String::with_capacity(preamble.shebang.len() + header.len() + body.len() + 4);
  if preamble.bom {
    out.push(BOM);
  }
  if !preamble.shebang.is_empty() {
    out.push_str(preamble.shebang);
    if !preamble.shebang.ends_with(['\n', '\r']) {
      out.push('\n');
    }
  }
  out.push_str(header);
  out.push_str(body);
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_split_plain_text() {
    let preamble = split_preamble("int x;\n", StyleFamily::Block);
    assert_eq!(
      preamble,
      Preamble {
        bom: false,
        shebang: "",
        rest: "int x;\n"
      }
    );
  }

  #[test]
  fn test_split_bom() {
    let preamble = split_preamble("\u{feff}int x;\n", StyleFamily::Block);
    assert!(preamble.bom);
    assert_eq!(preamble.rest, "int x;\n");
  }

  #[test]
  fn test_split_shebang_for_sharp() {
    let preamble = split_preamble("\u{feff}#!/usr/bin/env python3\n# old\nimport os\n", StyleFamily::Sharp);
    assert!(preamble.bom);
    assert_eq!(preamble.shebang, "#!/usr/bin/env python3\n");
    assert_eq!(preamble.rest, "# old\nimport os\n");
  }

  #[test]
  fn test_shebang_keeps_crlf_terminator() {
    let preamble = split_preamble("#!/bin/python\r\nx = 1\r\n", StyleFamily::Sharp);
    assert_eq!(preamble.shebang, "#!/bin/python\r\n");
    assert_eq!(preamble.rest, "x = 1\r\n");
  }

  #[test]
  fn test_block_family_never_detaches_shebang() {
    let preamble = split_preamble("#!/not/a/shebang\nint x;\n", StyleFamily::Block);
    assert_eq!(preamble.shebang, "");
    assert_eq!(preamble.rest, "#!/not/a/shebang\nint x;\n");
  }

  #[test]
  fn test_shebang_only_file() {
    let preamble = split_preamble("#!/usr/bin/env python3", StyleFamily::Sharp);
    assert_eq!(preamble.shebang, "#!/usr/bin/env python3");
    assert_eq!(preamble.rest, "");
  }

  #[test]
  fn test_compose_preserves_order() {
    let preamble = split_preamble("\u{feff}#!/bin/python\nold\n", StyleFamily::Sharp);
    let out = compose(&preamble, "# H\n\n", "body\n");
    assert_eq!(out, "\u{feff}#!/bin/python\n# H\n\nbody\n");
  }

  #[test]
  fn test_compose_terminates_bare_shebang() {
    let preamble = split_preamble("#!/bin/python", StyleFamily::Sharp);
    let out = compose(&preamble, "# H\n\n", "");
    assert_eq!(out, "#!/bin/python\n# H\n\n");
  }

  #[test]
  fn test_shebang_ends_at_lone_cr() {
    let preamble = split_preamble("#!/usr/bin/env python3\r# old\rimport os\r", StyleFamily::Sharp);
    assert_eq!(preamble.shebang, "#!/usr/bin/env python3\r");
    assert_eq!(preamble.rest, "# old\rimport os\r");
  }

  #[test]
  fn test_compose_keeps_cr_terminated_shebang() {
    let preamble = split_preamble("#!/bin/sh\rexit 0\r", StyleFamily::Sharp);
    let out = compose(&preamble, "# H\n\n", "exit 0\r");
    assert_eq!(out, "#!/bin/sh\r# H\n\nexit 0\r");
  }

  #[test]
  fn test_block_family_cr_only_text_is_not_split() {
    let preamble = split_preamble("// a\rint x;\r", StyleFamily::Block);
    assert_eq!(preamble.shebang, "");
    assert_eq!(preamble.rest, "// a\rint x;\r");
  }
}
