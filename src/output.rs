//! # Output Module
//!
//! This module centralizes all user-facing output: the "Updated" and
//! "Skipped" listings, failures, the summary line and hints.
//!
//! Paths are shown relative to the workspace root. In quiet mode nothing but
//! the paths that changed is printed, which keeps stdout usable in scripts.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success / already compliant
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Header rewritten
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Maximum number of unchanged files listed before truncating.
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Reports grouped by outcome, each group sorted by path.
pub struct CategorizedReports<'a> {
  pub updated: Vec<&'a FileReport>,
  pub unchanged: Vec<&'a FileReport>,
  pub failed: Vec<&'a FileReport>,
  pub ignored: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut categorized = Self {
      updated: Vec::new(),
      unchanged: Vec::new(),
      failed: Vec::new(),
      ignored: Vec::new(),
    };

    for report in reports {
      match report.action {
        FileAction::Updated => categorized.updated.push(report),
        FileAction::Unchanged => categorized.unchanged.push(report),
        FileAction::Failed => categorized.failed.push(report),
        FileAction::Ignored => categorized.ignored.push(report),
      }
    }

    for group in [
      &mut categorized.updated,
      &mut categorized.unchanged,
      &mut categorized.failed,
      &mut categorized.ignored,
    ] {
      group.sort_by(|a, b| a.path.cmp(&b.path));
    }
    categorized
  }
}

/// Print the initial "Processing N files..." or "Checking N files..." message.
pub fn print_start_message(file_count: usize, check_only: bool) {
  if is_quiet() {
    return;
  }

  let verb = if check_only { "Checking" } else { "Processing" };
  println!("{} {} {}...", verb, file_count, plural(file_count));
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the files whose header was rewritten, or would be in check mode.
///
/// Always lists every file; in quiet mode only the bare paths are printed.
pub fn print_updated_files(files: &[&FileReport], workspace_root: Option<&Path>, check_only: bool) {
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    for file in files {
      println!("{}", make_relative_path(&file.path, workspace_root));
    }
    return;
  }

  let title = if check_only { "Needs update:" } else { "Updated:" };
  println!(
    "{} {}",
    symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
    title
  );
  for file in files {
    println!("  {}", make_relative_path(&file.path, workspace_root));
  }
}

/// Print the files that were already compliant.
///
/// Shows up to `DEFAULT_FILE_LIST_LIMIT` files unless verbose.
pub fn print_skipped_files(files: &[&FileReport], workspace_root: Option<&Path>) {
  if is_quiet() || files.is_empty() {
    return;
  }

  println!(
    "{} Skipped (already compliant):",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );

  let count = files.len();
  let limit = if is_verbose() { count } else { DEFAULT_FILE_LIST_LIMIT };
  for file in files.iter().take(limit) {
    println!("  {}", make_relative_path(&file.path, workspace_root));
  }

  if count > limit {
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      count - limit
    );
  }
}

/// Print the files that could not be processed, with the reason.
pub fn print_failed_files(files: &[&FileReport], workspace_root: Option<&Path>) {
  if is_quiet() || files.is_empty() {
    return;
  }

  println!(
    "{} Skipped (could not process):",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red())
  );
  for file in files {
    let reason = file.reason.as_deref().unwrap_or("unknown error");
    println!("  {} ({})", make_relative_path(&file.path, workspace_root), reason);
  }
}

/// Print the success message when nothing needed to change.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files already have the canonical header.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X updated, Y unchanged, Z failed, W ignored"
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary, check_only: bool) {
  if is_quiet() {
    return;
  }

  let updated_label = if check_only { "need update" } else { "updated" };
  let failed_str = if summary.has_failures() {
    summary
      .files_failed
      .if_supports_color(Stream::Stdout, |s| s.red())
      .to_string()
  } else {
    summary
      .files_failed
      .if_supports_color(Stream::Stdout, |s| s.cyan())
      .to_string()
  };

  let mut line = format!(
    "Summary: {} {}, {} unchanged, {} failed, {} ignored",
    summary.files_updated.if_supports_color(Stream::Stdout, |s| s.yellow()),
    updated_label,
    summary.files_unchanged.if_supports_color(Stream::Stdout, |s| s.cyan()),
    failed_str,
    summary.files_ignored.if_supports_color(Stream::Stdout, |s| s.dimmed()),
  );

  if is_verbose() {
    line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{line}");
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Formats `path` relative to `workspace_root` when possible.
pub fn make_relative_path(path: &Path, workspace_root: Option<&Path>) -> String {
  workspace_root
    .and_then(|root| pathdiff::diff_paths(path, root))
    .filter(|relative| !relative.starts_with(".."))
    .unwrap_or_else(|| path.to_path_buf())
    .to_string_lossy()
    .to_string()
}

const fn plural(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}
