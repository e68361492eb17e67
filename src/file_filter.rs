//! # File Filter Module
//!
//! This module decides which enumerated paths are eligible for processing
//! before the style registry is consulted: paths must be regular files, and
//! must not match a user-supplied exclude pattern.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use tracing::trace;

/// Result of a file filtering operation.
#[derive(Debug, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter: Send + Sync {
  /// Determines whether a file should be processed.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Skips anything that is not a regular file: paths listed by git that no
/// longer exist, directories, and symlinks.
pub struct RegularFileFilter;

impl FileFilter for RegularFileFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    match std::fs::symlink_metadata(path) {
      Ok(metadata) if metadata.file_type().is_symlink() => FilterResult::skip("Symlink"),
      Ok(metadata) if metadata.is_file() => FilterResult::process(),
      Ok(_) => FilterResult::skip("Not a regular file"),
      Err(_) => FilterResult::skip("File does not exist"),
    }
  }
}

/// Skips files whose workspace-relative path matches an exclude glob.
pub struct ExcludeFilter {
  workspace_root: PathBuf,
  patterns: Vec<Pattern>,
}

impl ExcludeFilter {
  /// Compiles the exclude patterns.
  ///
  /// # Errors
  ///
  /// Returns an error if any pattern is not a valid glob.
  pub fn new(workspace_root: PathBuf, patterns: &[String]) -> Result<Self> {
    let patterns = patterns
      .iter()
      .map(|p| Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
      .collect::<Result<Vec<_>>>()?;

    Ok(Self {
      workspace_root,
      patterns,
    })
  }

  pub fn is_empty(&self) -> bool {
    self.patterns.is_empty()
  }
}

impl FileFilter for ExcludeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    let relative = path.strip_prefix(&self.workspace_root).unwrap_or(path);
    let options = MatchOptions {
      case_sensitive: true,
      require_literal_separator: true,
      require_literal_leading_dot: false,
    };

    for pattern in &self.patterns {
      if pattern.matches_path_with(relative, options) {
        trace!("Skipping: {} (matches {})", path.display(), pattern.as_str());
        return FilterResult::skip(format!("Matches exclude pattern: {}", pattern.as_str()));
      }
    }
    FilterResult::process()
  }
}

/// Filter that combines multiple filters; the first skip wins.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Builds the default filter chain: regular files only, then excludes.
pub fn create_default_filter(workspace_root: PathBuf, exclude_patterns: &[String]) -> Result<CompositeFilter> {
  let exclude = ExcludeFilter::new(workspace_root, exclude_patterns)?;
  let mut filters: Vec<Box<dyn FileFilter>> = vec![Box::new(RegularFileFilter)];
  if !exclude.is_empty() {
    filters.push(Box::new(exclude));
  }
  Ok(CompositeFilter::new(filters))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_exclude_filter_matches_relative_paths() {
    let root = PathBuf::from("/repo");
    let filter = ExcludeFilter::new(root.clone(), &["vendor/**".to_string(), "*.gen.rs".to_string()])
      .expect("valid patterns");

    assert!(!filter.should_process(&root.join("vendor/lib/a.c")).should_process);
    assert!(!filter.should_process(&root.join("out.gen.rs")).should_process);
    // "*" does not cross directory separators.
    assert!(filter.should_process(&root.join("src/out.gen.rs")).should_process);
    assert!(filter.should_process(&root.join("src/main.rs")).should_process);
  }

  #[test]
  fn test_exclude_filter_reports_pattern() {
    let root = PathBuf::from("/repo");
    let filter = ExcludeFilter::new(root.clone(), &["third_party/**".to_string()]).expect("valid");
    let result = filter.should_process(&root.join("third_party/x.h"));
    assert_eq!(result, FilterResult::skip("Matches exclude pattern: third_party/**"));
  }

  #[test]
  fn test_invalid_exclude_pattern_is_an_error() {
    assert!(ExcludeFilter::new(PathBuf::from("/repo"), &["[".to_string()]).is_err());
  }

  #[test]
  fn test_regular_file_filter() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("a.rs");
    fs::write(&file, "fn a() {}\n").expect("write");

    assert!(RegularFileFilter.should_process(&file).should_process);
    assert!(!RegularFileFilter.should_process(dir.path()).should_process);
    assert!(!RegularFileFilter.should_process(&dir.path().join("gone.rs")).should_process);
  }

  #[cfg(unix)]
  #[test]
  fn test_regular_file_filter_skips_symlinks() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("real.py");
    let link = dir.path().join("link.py");
    fs::write(&target, "x = 1\n").expect("write");
    std::os::unix::fs::symlink(&target, &link).expect("symlink");

    assert_eq!(RegularFileFilter.should_process(&link), FilterResult::skip("Symlink"));
  }

  #[test]
  fn test_composite_filter_first_skip_wins() {
    let dir = tempdir().expect("tempdir");
    let filter = create_default_filter(dir.path().to_path_buf(), &["**/*.rs".to_string()]).expect("filter");
    let missing = dir.path().join("missing.rs");
    assert_eq!(filter.should_process(&missing), FilterResult::skip("File does not exist"));

    let present = dir.path().join("present.rs");
    fs::write(&present, "").expect("write");
    assert_eq!(
      filter.should_process(&present),
      FilterResult::skip("Matches exclude pattern: **/*.rs")
    );
  }
}
