mod common;

use std::path::{Path, PathBuf};

use anyhow::Result;
use common::{git_add_and_commit, init_git_repo, is_git_available, write_file};
use hdrsync::file_source::{EnumerationError, FileSource, GitFileSource};
use hdrsync::git;
use hdrsync::workspace::{Workspace, resolve_workspace};
use tempfile::{TempDir, tempdir};

fn init_temp_git_repo() -> Result<TempDir> {
  let temp_dir = tempdir()?;
  init_git_repo(temp_dir.path())?;
  Ok(temp_dir)
}

fn relative_paths(files: &[PathBuf], root: &Path) -> Vec<String> {
  let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
  files
    .iter()
    .map(|f| {
      let f = f.canonicalize().unwrap_or_else(|_| f.clone());
      f.strip_prefix(&root).unwrap_or(&f).to_string_lossy().replace('\\', "/")
    })
    .collect()
}

#[test]
fn test_lists_tracked_and_untracked_files() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  write_file(repo.path(), "src/tracked.rs", "fn a() {}\n")?;
  git_add_and_commit(repo.path(), &["src/tracked.rs"], "Initial commit")?;
  write_file(repo.path(), "src/new/untracked.py", "x = 1\n")?;

  let files = git::list_repository_files(repo.path())?;

  assert_eq!(
    relative_paths(&files, repo.path()),
    vec!["src/new/untracked.py".to_string(), "src/tracked.rs".to_string()]
  );
  Ok(())
}

#[test]
fn test_ignored_files_are_not_listed() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  write_file(repo.path(), ".gitignore", "build/\n*.gen.c\n")?;
  write_file(repo.path(), "main.c", "int main(void) { return 0; }\n")?;
  write_file(repo.path(), "build/out.c", "int out;\n")?;
  write_file(repo.path(), "table.gen.c", "int table[] = {0};\n")?;
  git_add_and_commit(repo.path(), &[".gitignore", "main.c"], "Initial commit")?;

  let files = GitFileSource::new(repo.path().to_path_buf()).list_files()?;
  let listed = relative_paths(&files, repo.path());

  assert!(listed.contains(&"main.c".to_string()));
  assert!(listed.contains(&".gitignore".to_string()));
  assert!(!listed.iter().any(|f| f.starts_with("build/")));
  assert!(!listed.contains(&"table.gen.c".to_string()));
  Ok(())
}

#[test]
fn test_tracked_file_matching_ignore_rule_is_still_listed() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  write_file(repo.path(), "keep.h", "int keep;\n")?;
  git_add_and_commit(repo.path(), &["keep.h"], "Track before ignoring")?;
  write_file(repo.path(), ".gitignore", "*.h\n")?;

  let files = git::list_repository_files(repo.path())?;
  assert!(relative_paths(&files, repo.path()).contains(&"keep.h".to_string()));
  Ok(())
}

#[test]
fn test_discover_repo_root_from_subdirectory() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let repo = init_temp_git_repo()?;
  write_file(repo.path(), "a/b/c.rs", "")?;

  let root = git::discover_repo_root(&repo.path().join("a/b"))?;
  assert_eq!(root.canonicalize()?, repo.path().canonicalize()?);
  Ok(())
}

#[test]
fn test_not_a_repository_is_an_error() -> Result<()> {
  let dir = tempdir()?;
  // A directory inside the system temp dir is not normally under version
  // control; skip if it is.
  if git2::Repository::discover(dir.path()).is_ok() {
    return Ok(());
  }

  let err = resolve_workspace(dir.path(), true).expect_err("must fail outside a repository");
  assert!(matches!(err, EnumerationError::NotARepository { .. }));
  assert!(err.to_string().contains("--no-git"));
  Ok(())
}

#[test]
fn test_directory_workspace_without_git() -> Result<()> {
  let dir = tempdir()?;
  let workspace = resolve_workspace(dir.path(), false)?;

  assert!(matches!(workspace, Workspace::Directory { .. }));
  assert!(!workspace.is_git());
  assert_eq!(workspace.root(), dir.path());
  Ok(())
}
