//! # Styles Module
//!
//! This module maps file names to a comment-style family and holds the
//! canonical header text for each family.
//!
//! The mapping is an ordered suffix table. Rules are checked top to bottom
//! against the lowercased file name and the first match wins, so compound
//! suffixes such as `.h.in` are listed before the plain suffixes that would
//! otherwise shadow them.
//!
//! ## Example
//!
//! ```rust
//! use hdrsync::styles::{StyleFamily, style_for};
//!
//! assert_eq!(style_for("main.rs"), Some(StyleFamily::Block));
//! assert_eq!(style_for("CMakeLists.txt"), Some(StyleFamily::Sharp));
//! assert_eq!(style_for("README.md"), None);
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Comment syntax family of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFamily {
  /// `/* ... */` blocks or `//` line runs.
  Block,
  /// `#` line runs or triple-quoted docstrings.
  Sharp,
}

impl StyleFamily {
  /// Returns the canonical header every file of this family must start with.
  pub const fn canonical_header(self) -> &'static str {
    match self {
      Self::Block => BLOCK_HEADER,
      Self::Sharp => SHARP_HEADER,
    }
  }
}

impl fmt::Display for StyleFamily {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Block => write!(f, "block"),
      Self::Sharp => write!(f, "sharp"),
    }
  }
}

/// Canonical header for the block family.
pub const BLOCK_HEADER: &str = concat!(
  "/*\n",
  " * SPDX-License-Identifier: Apache-2.0\n",
  " *\n",
  " * This file is part of hdrsync\n",
  " *\n",
  " * Copyright (C) 2026 The hdrsync Authors\n",
  " */\n",
  "\n",
);

/// Canonical header for the sharp family.
pub const SHARP_HEADER: &str = concat!(
  "# SPDX-License-Identifier: Apache-2.0\n",
  "#\n",
  "# This file is part of hdrsync\n",
  "#\n",
  "# Copyright (C) 2026 The hdrsync Authors\n",
  "\n",
);

/// Ordered `(suffix, family)` rules. Suffixes are lowercase.
pub const SUFFIX_STYLES: &[(&str, StyleFamily)] = &[
  (".h.in", StyleFamily::Block),
  (".tsx", StyleFamily::Block),
  (".ts", StyleFamily::Block),
  (".c", StyleFamily::Block),
  (".h", StyleFamily::Block),
  (".rs", StyleFamily::Block),
  (".py", StyleFamily::Sharp),
  (".cmake", StyleFamily::Sharp),
  ("cmakelists.txt", StyleFamily::Sharp),
  (".typed", StyleFamily::Sharp),
];

/// Looks up the style family for a bare file name.
///
/// Returns `None` when no rule matches, meaning the file is not processed.
pub fn style_for(file_name: &str) -> Option<StyleFamily> {
  let lowered = file_name.to_lowercase();
  SUFFIX_STYLES
    .iter()
    .find(|(suffix, _)| lowered.ends_with(suffix))
    .map(|&(_, family)| family)
}

/// Looks up the style family for the final component of `path`.
pub fn style_for_path(path: &Path) -> Option<StyleFamily> {
  path.file_name().and_then(|name| name.to_str()).and_then(style_for)
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn test_every_table_suffix_maps_to_its_family() {
    for (suffix, family) in SUFFIX_STYLES {
      let name = format!("sample{suffix}");
      assert_eq!(style_for(&name), Some(*family), "suffix {suffix}");
    }
  }

  #[test]
  fn test_lookup_is_case_insensitive() {
    assert_eq!(style_for("MAIN.RS"), Some(StyleFamily::Block));
    assert_eq!(style_for("CMakeLists.txt"), Some(StyleFamily::Sharp));
    assert_eq!(style_for("Tool.Py"), Some(StyleFamily::Sharp));
  }

  #[test]
  fn test_compound_suffix_wins_over_plain_suffix() {
    // ".h.in" must not fall through to any later rule.
    assert_eq!(style_for("config.h.in"), Some(StyleFamily::Block));
    assert_eq!(style_for("toolchain.cmake"), Some(StyleFamily::Sharp));
  }

  #[test]
  fn test_unmatched_names_are_excluded() {
    assert_eq!(style_for("README.md"), None);
    assert_eq!(style_for("notes.txt"), None);
    assert_eq!(style_for("Makefile"), None);
    assert_eq!(style_for("script.sh"), None);
    assert_eq!(style_for(""), None);
  }

  #[test]
  fn test_style_for_path_uses_file_name_only() {
    assert_eq!(
      style_for_path(&PathBuf::from("/repo/dir.py/README")),
      None,
      "directory names must not influence the lookup"
    );
    assert_eq!(
      style_for_path(&PathBuf::from("/repo/src/lib.rs")),
      Some(StyleFamily::Block)
    );
  }

  #[test]
  fn test_canonical_headers_end_with_one_blank_line() {
    for family in [StyleFamily::Block, StyleFamily::Sharp] {
      let header = family.canonical_header();
      assert!(header.ends_with("\n\n"), "{family} header must end with a blank line");
      assert!(!header.ends_with("\n\n\n"), "{family} header must end with exactly one blank line");
    }
    assert!(BLOCK_HEADER.starts_with("/*"));
    assert!(SHARP_HEADER.starts_with('#'));
  }
}
