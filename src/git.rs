//! # Git Module
//!
//! This module locates the git work tree and lists the files it contains:
//! everything in the index plus untracked files that are not ignored.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use git2::{Repository, StatusOptions};
use tracing::{debug, trace};

use crate::file_source::EnumerationError;

/// Index mode of a gitlink (submodule) entry.
const GITLINK_MODE: u32 = 0o160000;

/// Finds the root of the work tree containing `start`.
///
/// # Errors
///
/// Returns [`EnumerationError::NotARepository`] when no repository contains
/// `start`, and [`EnumerationError::BareRepository`] when the repository has
/// no working tree.
pub fn discover_repo_root(start: &Path) -> Result<PathBuf, EnumerationError> {
  let repo = Repository::discover(start).map_err(|source| EnumerationError::NotARepository {
    path: start.to_path_buf(),
    source,
  })?;

  let workdir = repo.workdir().ok_or_else(|| EnumerationError::BareRepository {
    path: repo.path().to_path_buf(),
  })?;

  Ok(workdir.to_path_buf())
}

/// Lists tracked and untracked, non-ignored files of the work tree at `root`.
///
/// Returned paths are absolute and sorted. Tracked files that were deleted
/// from the work tree are still listed; callers filter on existence.
pub fn list_repository_files(root: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
  let repo = Repository::open(root).map_err(|source| EnumerationError::NotARepository {
    path: root.to_path_buf(),
    source,
  })?;
  let workdir = repo
    .workdir()
    .ok_or_else(|| EnumerationError::BareRepository {
      path: repo.path().to_path_buf(),
    })?
    .to_path_buf();

  let mut files = BTreeSet::new();

  let index = repo.index()?;
  for entry in index.iter() {
    if entry.mode == GITLINK_MODE {
      continue;
    }
    match std::str::from_utf8(&entry.path) {
      Ok(path) => {
        files.insert(workdir.join(path));
      }
      Err(_) => trace!("Skipping index entry with non UTF-8 path"),
    }
  }
  let tracked = files.len();

  let mut status_opts = StatusOptions::new();
  status_opts
    .include_untracked(true)
    .recurse_untracked_dirs(true)
    .include_ignored(false)
    .exclude_submodules(true);

  let statuses = repo.statuses(Some(&mut status_opts))?;
  for entry in statuses.iter() {
    if entry.status().is_wt_new()
      && let Some(path) = entry.path()
    {
      files.insert(workdir.join(path));
    }
  }

  debug!(
    "Listed {} tracked and {} untracked files in {}",
    tracked,
    files.len() - tracked,
    workdir.display()
  );

  Ok(files.into_iter().collect())
}
