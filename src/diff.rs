//! # Diff Module
//!
//! This module renders unified diffs of pending header changes. It is used in
//! check mode to show what a run without `--check` would write.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::TextDiff;

/// Number of unchanged lines shown around each hunk.
const CONTEXT_LINES: usize = 3;

/// Manages diff creation and rendering for header changes.
///
/// Diffs can be printed to stderr, appended to a file, or both.
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// Path that diffs are appended to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the save file so a run starts from an empty diff.
  pub fn init(&self) -> Result<()> {
    if let Some(ref diff_path) = self.save_diff_path {
      std::fs::write(diff_path, "").with_context(|| format!("Failed to create diff file {}", diff_path.display()))?;
    }
    Ok(())
  }

  /// Renders the unified diff between `original` and `new` for `path`.
  pub fn render(path: &Path, original: &str, new: &str) -> String {
    let name = path.to_string_lossy();
    TextDiff::from_lines(original, new)
      .unified_diff()
      .context_radius(CONTEXT_LINES)
      .header(&format!("a/{name}"), &format!("b/{name}"))
      .to_string()
  }

  /// Displays and/or saves the diff for one file.
  ///
  /// Multiple diffs are appended to the same save file, producing a single
  /// patch for the whole run.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    let diff = Self::render(path, original, new);

    if self.show_diff {
      for line in diff.lines() {
        if line.starts_with('+') && !line.starts_with("+++") {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()));
        } else if line.starts_with('-') && !line.starts_with("---") {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.red()));
        } else if line.starts_with("@@") {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.cyan()));
        } else {
          eprintln!("{line}");
        }
      }
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file {}", diff_path.display()))?;
      file
        .write_all(diff.as_bytes())
        .with_context(|| format!("Failed to write diff file {}", diff_path.display()))?;
    }

    Ok(())
  }
}
