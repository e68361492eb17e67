#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// Checks if the git command line tool is available.
pub fn is_git_available() -> bool {
  Command::new("git").arg("--version").status().is_ok()
}

/// Runs git in `dir`, failing with git's stderr when the command fails.
pub fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
  let output = Command::new("git")
    .args(args)
    .current_dir(dir)
    .output()
    .with_context(|| format!("Failed to execute git {args:?}"))?;

  if !output.status.success() {
    anyhow::bail!("git {:?} failed: {}", args, String::from_utf8_lossy(&output.stderr));
  }
  Ok(())
}

/// Initializes a repository with a local identity and signing disabled.
pub fn init_git_repo(dir: &Path) -> Result<()> {
  run_git(dir, &["init", "--quiet"])?;
  run_git(dir, &["config", "user.name", "Test User"])?;
  run_git(dir, &["config", "user.email", "test@example.com"])?;
  run_git(dir, &["config", "commit.gpgsign", "false"])?;
  Ok(())
}

/// Stages `files` and commits them.
pub fn git_add_and_commit(dir: &Path, files: &[&str], message: &str) -> Result<()> {
  let mut args = vec!["add", "--"];
  args.extend_from_slice(files);
  run_git(dir, &args)?;
  run_git(dir, &["commit", "--quiet", "-m", message])
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads `root/relative` as a string.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  let path = root.join(relative);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}
