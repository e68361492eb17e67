//! # Report Module
//!
//! This module records what happened to each candidate file and can write the
//! collected results as a JSON report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::styles::StyleFamily;

/// Outcome for one candidate file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// Style family the file was matched to, if any
  pub style: Option<StyleFamily>,
  /// What was done (or, in check mode, what would be done)
  pub action: FileAction,
  /// Why the file was ignored or failed
  pub reason: Option<String>,
}

impl FileReport {
  pub const fn new(path: PathBuf, style: Option<StyleFamily>, action: FileAction) -> Self {
    Self {
      path,
      style,
      action,
      reason: None,
    }
  }

  pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
    self.reason = Some(reason.into());
    self
  }
}

/// Possible outcomes for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
  /// The header was inserted or replaced (or needs to be, in check mode)
  Updated,
  /// The file already starts with the canonical header
  Unchanged,
  /// The file could not be read, decoded or written
  Failed,
  /// The file was excluded by a filter
  Ignored,
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Aggregate counts over a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingSummary {
  pub total_files: usize,
  pub files_updated: usize,
  pub files_unchanged: usize,
  pub files_failed: usize,
  pub files_ignored: usize,
  #[serde(serialize_with = "serialize_secs")]
  pub processing_time: Duration,
}

fn serialize_secs<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_f64(duration.as_secs_f64())
}

impl ProcessingSummary {
  pub fn from_reports(files: &[FileReport], processing_time: Duration) -> Self {
    let mut summary = Self {
      total_files: files.len(),
      processing_time,
      ..Self::default()
    };

    for file in files {
      match file.action {
        FileAction::Updated => summary.files_updated += 1,
        FileAction::Unchanged => summary.files_unchanged += 1,
        FileAction::Failed => summary.files_failed += 1,
        FileAction::Ignored => summary.files_ignored += 1,
      }
    }

    summary
  }

  pub const fn has_failures(&self) -> bool {
    self.files_failed > 0
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  generated_at: String,
  check_only: bool,
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Writes the reports and summary to `output_path` as pretty-printed JSON.
pub fn write_json_report(
  output_path: &Path,
  files: &[FileReport],
  summary: &ProcessingSummary,
  check_only: bool,
) -> Result<()> {
  let report = JsonReport {
    generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    check_only,
    summary,
    files,
  };

  let content = serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")?;
  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}
