//! # File I/O Module
//!
//! This module provides whole-file reading and writing for the processor.
//! Files are decoded strictly as UTF-8 and replaced in one step, so a reader
//! never observes a half-written file.

use std::fs;
use std::path::{Path, PathBuf};

/// Per-file failure. None of these abort a batch.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
  /// The file is not valid UTF-8 text.
  #[error("File is not valid UTF-8 text '{path}': {source}")]
  Decode {
    path: PathBuf,
    source: std::string::FromUtf8Error,
  },

  /// The file could not be read.
  #[error("Failed to read file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The new content could not be written.
  #[error("Failed to write file '{path}': {source}")]
  Write { path: PathBuf, source: std::io::Error },
}

impl ApplyError {
  /// Short reason used in reports.
  pub const fn reason(&self) -> &'static str {
    match self {
      Self::Decode { .. } => "encoding issue",
      Self::Read { .. } => "read error",
      Self::Write { .. } => "write error",
    }
  }
}

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the whole file and decodes it as UTF-8.
  pub fn read_text(path: &Path) -> Result<String, ApplyError> {
    let bytes = fs::read(path).map_err(|source| ApplyError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    String::from_utf8(bytes).map_err(|source| ApplyError::Decode {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Replaces the file content.
  ///
  /// The content goes to a sibling temporary file first, which is then renamed
  /// over the original. The original permissions are carried over.
  pub fn replace_file(path: &Path, content: &str) -> Result<(), ApplyError> {
    let write_err = |source| ApplyError::Write {
      path: path.to_path_buf(),
      source,
    };

    let staging = staging_path(path);
    let permissions = fs::metadata(path).map(|m| m.permissions()).ok();

    let result = fs::write(&staging, content)
      .and_then(|()| match permissions {
        Some(perms) => fs::set_permissions(&staging, perms),
        None => Ok(()),
      })
      .and_then(|()| fs::rename(&staging, path));

    if let Err(source) = result {
      let _ = fs::remove_file(&staging);
      return Err(write_err(source));
    }
    Ok(())
  }
}

fn staging_path(path: &Path) -> PathBuf {
  let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
  name.push(".hdrsync-tmp");
  path.with_file_name(name)
}
