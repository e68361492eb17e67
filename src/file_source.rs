//! # File Source Module
//!
//! This module defines where candidate paths come from. The processor does not
//! care how a list is produced; it only consumes the paths a [`FileSource`]
//! returns. Failing to produce the list is fatal for the whole run.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::git;

/// Failure to enumerate candidate files. Aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum EnumerationError {
  /// No git repository contains the starting directory.
  #[error("Not inside a git repository: {path} (run from a git checkout, or pass --no-git)")]
  NotARepository { path: PathBuf, source: git2::Error },

  /// The repository has no working tree to list files from.
  #[error("Git repository at {path} has no working tree")]
  BareRepository { path: PathBuf },

  /// Listing the index or status failed.
  #[error("Failed to list repository files: {0}")]
  Git(#[from] git2::Error),

  /// Walking a directory failed.
  #[error("Failed to walk directory: {0}")]
  Walk(#[from] ignore::Error),
}

/// Supplies the unordered list of candidate file paths.
pub trait FileSource {
  /// Lists candidate paths. Returned paths are absolute or relative to the
  /// process working directory.
  fn list_files(&self) -> Result<Vec<PathBuf>, EnumerationError>;
}

/// Tracked and untracked, non-ignored files of a git work tree.
pub struct GitFileSource {
  root: PathBuf,
}

impl GitFileSource {
  pub const fn new(root: PathBuf) -> Self {
    Self { root }
  }
}

impl FileSource for GitFileSource {
  fn list_files(&self) -> Result<Vec<PathBuf>, EnumerationError> {
    git::list_repository_files(&self.root)
  }
}

/// Files under a directory, honouring `.gitignore` and `.ignore` files.
pub struct WalkFileSource {
  root: PathBuf,
}

impl WalkFileSource {
  pub const fn new(root: PathBuf) -> Self {
    Self { root }
  }
}

impl FileSource for WalkFileSource {
  fn list_files(&self) -> Result<Vec<PathBuf>, EnumerationError> {
    walk_directory(&self.root)
  }
}

/// An explicit list of paths. Directories in the list are walked.
pub struct ListFileSource {
  paths: Vec<PathBuf>,
}

impl ListFileSource {
  /// Creates a source from `paths`, resolving relative ones against `base_dir`.
  pub fn new(paths: Vec<PathBuf>, base_dir: &Path) -> Self {
    let paths = paths
      .into_iter()
      .map(|p| if p.is_absolute() { p } else { base_dir.join(p) })
      .collect();
    Self { paths }
  }
}

impl FileSource for ListFileSource {
  fn list_files(&self) -> Result<Vec<PathBuf>, EnumerationError> {
    let mut files = Vec::with_capacity(self.paths.len());
    for path in &self.paths {
      if path.is_dir() {
        files.extend(walk_directory(path)?);
      } else {
        files.push(path.clone());
      }
    }
    Ok(files)
  }
}

fn walk_directory(root: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
  debug!("Walking directory: {}", root.display());

  let walker = WalkBuilder::new(root)
    .hidden(false)
    .require_git(false)
    .filter_entry(|entry| entry.file_name() != ".git")
    .build();

  let mut files = Vec::new();
  for entry in walker {
    let entry = entry?;
    if entry.file_type().is_some_and(|ft| ft.is_file()) {
      files.push(entry.into_path());
    }
  }

  debug!("Found {} files under {}", files.len(), root.display());
  Ok(files)
}
