//! # Processor Module
//!
//! This module contains the header applicator: it decides what a file should
//! look like with its canonical header and rewrites it when that differs from
//! what is on disk.
//!
//! The module is organized into several submodules:
//! - [`stripper`] - Detection and removal of a prior leading comment block
//! - [`content_transformer`] - BOM and shebang handling around the header
//! - [`file_io`] - Whole-file reads and replacements
//!
//! [`normalize`] is the pure core, [`apply_header`] applies it to one file,
//! and [`Processor`] runs it over a batch of enumerated paths, isolating
//! per-file failures into [`FileReport`]s.

pub mod content_transformer;
mod file_io;
pub mod stripper;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
pub use content_transformer::{Preamble, compose, split_preamble};
pub use file_io::{ApplyError, FileIO};
pub use stripper::{StripOutcome, strip_leading_comment};
use tracing::{debug, trace, warn};

use crate::diff::DiffManager;
use crate::file_filter::{CompositeFilter, FileFilter, create_default_filter};
use crate::file_source::FileSource;
use crate::report::{FileAction, FileReport};
use crate::styles::{StyleFamily, style_for_path};

/// A candidate file and the style family assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
  pub path: PathBuf,
  pub style: StyleFamily,
}

impl FileRecord {
  /// Creates a record when the file name matches a style rule.
  pub fn from_path(path: PathBuf) -> Option<Self> {
    let style = style_for_path(&path)?;
    Some(Self { path, style })
  }
}

/// Computes the normalized content of a file.
///
/// Returns `None` when the file already starts with the canonical header (after
/// any BOM and shebang) or when the rebuilt content is byte-identical to the
/// input. Otherwise returns the full new content:
/// BOM + shebang + canonical header + body, where the body is the input with
/// its old leading comment block and leading blank lines removed.
pub fn normalize(content: &str, family: StyleFamily) -> Option<String> {
  let header = family.canonical_header();
  let preamble = split_preamble(content, family);

  if preamble.rest.starts_with(header) {
    return None;
  }

  let outcome = strip_leading_comment(preamble.rest, family);
  trace!("Leading comment removed: {}", outcome.is_removed());
  let body = stripper::trim_leading_newlines(outcome.remainder());

  let rebuilt = compose(&preamble, header, body);
  if rebuilt == content { None } else { Some(rebuilt) }
}

/// Ensures the file at `path` starts with the canonical header for `family`.
///
/// Returns `Ok(true)` if the file was rewritten and `Ok(false)` if it was
/// already canonical. The file is never written when it fails to decode.
pub fn apply_header(path: &Path, family: StyleFamily) -> Result<bool, ApplyError> {
  let original = FileIO::read_text(path)?;
  match normalize(&original, family) {
    Some(updated) => {
      FileIO::replace_file(path, &updated)?;
      Ok(true)
    }
    None => Ok(false),
  }
}

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Root that reports and exclude patterns are relative to.
  pub workspace_root: PathBuf,
  /// Report pending changes without writing.
  pub check_only: bool,
  /// Globs of workspace-relative paths to leave alone.
  pub exclude_patterns: Vec<String>,
  /// Diff output for check mode.
  pub diff_manager: Option<DiffManager>,
}

impl ProcessorConfig {
  /// Creates a config that modifies files and excludes nothing.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(workspace_root)
  /// }
  /// ```
  pub const fn new(workspace_root: PathBuf) -> Self {
    Self {
      workspace_root,
      check_only: false,
      exclude_patterns: Vec::new(),
      diff_manager: None,
    }
  }
}

/// Runs the header applicator over a batch of files.
///
/// Files are independent: each one is read, transformed and conditionally
/// written before the next, and a failure on one file never stops the batch.
pub struct Processor {
  workspace_root: PathBuf,
  check_only: bool,
  file_filter: CompositeFilter,
  diff_manager: Option<DiffManager>,
}

impl Processor {
  /// Creates a new processor.
  ///
  /// # Errors
  ///
  /// Returns an error if any exclude pattern is not a valid glob.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    let file_filter = create_default_filter(config.workspace_root.clone(), &config.exclude_patterns)?;

    Ok(Self {
      workspace_root: config.workspace_root,
      check_only: config.check_only,
      file_filter,
      diff_manager: config.diff_manager,
    })
  }

  /// Enumerates `source` and processes every eligible file.
  ///
  /// # Errors
  ///
  /// Only enumeration failures are returned; per-file failures end up in the
  /// reports as [`FileAction::Failed`].
  #[allow(dead_code)] // Used by library consumers and tests, not in the CLI binary
  pub fn process_source(&self, source: &dyn FileSource) -> Result<Vec<FileReport>> {
    let files = source.list_files()?;
    debug!("File source returned {} paths", files.len());

    let (targets, mut reports) = self.collect_targets(files);
    reports.extend(self.process_targets(&targets));
    Ok(reports)
  }

  /// Turns enumerated paths into ordered [`FileRecord`]s.
  ///
  /// Paths whose names match no style rule are dropped without a report.
  /// Styled paths rejected by a filter come back as ignored reports.
  pub fn collect_targets(&self, files: Vec<PathBuf>) -> (Vec<FileRecord>, Vec<FileReport>) {
    let mut targets = Vec::new();
    let mut ignored = Vec::new();

    for path in files {
      let Some(record) = FileRecord::from_path(path) else {
        continue;
      };

      let result = self.file_filter.should_process(&record.path);
      if result.should_process {
        targets.push(record);
      } else {
        let reason = result.reason.unwrap_or_else(|| "Filtered".to_string());
        trace!("Skipping: {} ({})", record.path.display(), reason);
        ignored.push(FileReport::new(record.path, Some(record.style), FileAction::Ignored).with_reason(reason));
      }
    }

    targets.sort_by(|a, b| self.relative(&a.path).cmp(self.relative(&b.path)));
    targets.dedup();
    (targets, ignored)
  }

  /// Processes records in order, one file at a time.
  pub fn process_targets(&self, targets: &[FileRecord]) -> Vec<FileReport> {
    let start = Instant::now();
    let mut reports = Vec::with_capacity(targets.len());

    for record in targets {
      let report = match self.process_file(record) {
        Ok(true) => FileReport::new(record.path.clone(), Some(record.style), FileAction::Updated),
        Ok(false) => FileReport::new(record.path.clone(), Some(record.style), FileAction::Unchanged),
        Err(e) => {
          warn!("Skipping ({}): {}", e.reason(), e);
          FileReport::new(record.path.clone(), Some(record.style), FileAction::Failed).with_reason(e.reason())
        }
      };
      reports.push(report);
    }

    debug!(
      "Processed {} files in {}ms",
      targets.len(),
      start.elapsed().as_millis()
    );
    reports
  }

  /// Processes a single record.
  ///
  /// In check mode nothing is written; the result says whether the file would
  /// change, and a diff is produced if requested.
  pub fn process_file(&self, record: &FileRecord) -> Result<bool, ApplyError> {
    if !self.check_only {
      let changed = apply_header(&record.path, record.style)?;
      if changed {
        debug!("Rewrote header: {}", record.path.display());
      }
      return Ok(changed);
    }

    let original = FileIO::read_text(&record.path)?;
    let Some(updated) = normalize(&original, record.style) else {
      return Ok(false);
    };

    if let Some(diff_manager) = &self.diff_manager
      && let Err(e) = diff_manager.display_diff(self.relative(&record.path), &original, &updated)
    {
      warn!("Failed to record diff for {}: {}", record.path.display(), e);
    }
    Ok(true)
  }

  fn relative<'a>(&self, path: &'a Path) -> &'a Path {
    path.strip_prefix(&self.workspace_root).unwrap_or(path)
  }
}
