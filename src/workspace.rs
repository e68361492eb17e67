//! # Workspace Module
//!
//! This module defines the workspace root that hdrsync operates on and the
//! file source that enumerates it.

use std::path::{Path, PathBuf};

use crate::file_source::{EnumerationError, FileSource, GitFileSource, WalkFileSource};
use crate::git;

/// Workspace root selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workspace {
  /// Workspace rooted at a git work tree.
  Git { root: PathBuf },
  /// Workspace rooted at a plain directory.
  Directory { root: PathBuf },
}

impl Workspace {
  pub fn root(&self) -> &Path {
    match self {
      Self::Git { root } | Self::Directory { root } => root.as_path(),
    }
  }

  pub const fn is_git(&self) -> bool {
    matches!(self, Self::Git { .. })
  }

  /// The source that lists every candidate file of this workspace.
  pub fn file_source(&self) -> Box<dyn FileSource> {
    match self {
      Self::Git { root } => Box::new(GitFileSource::new(root.clone())),
      Self::Directory { root } => Box::new(WalkFileSource::new(root.clone())),
    }
  }
}

/// Resolves the workspace for `start`.
///
/// With `use_git` the enclosing git work tree is required; otherwise `start`
/// itself is the root.
pub fn resolve_workspace(start: &Path, use_git: bool) -> Result<Workspace, EnumerationError> {
  if use_git {
    let root = git::discover_repo_root(start)?;
    return Ok(Workspace::Git {
      root: normalize_root(root),
    });
  }

  Ok(Workspace::Directory {
    root: start.to_path_buf(),
  })
}

/// Strips the trailing separator git2 leaves on work tree paths.
fn normalize_root(root: PathBuf) -> PathBuf {
  root.components().collect()
}
