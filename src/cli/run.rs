//! # Run Command
//!
//! This module wires the CLI together: it resolves the workspace, loads the
//! configuration, enumerates candidate files, runs the processor and prints
//! the results.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::load_config;
use crate::diff::DiffManager;
use crate::file_source::{FileSource, ListFileSource};
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  CategorizedReports, print_all_files_ok, print_blank_line, print_failed_files, print_hint, print_skipped_files,
  print_start_message, print_summary, print_updated_files,
};
use crate::processor::{Processor, ProcessorConfig};
use crate::report::{ProcessingSummary, write_json_report};
use crate::workspace::resolve_workspace;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
  /// Files or directories to process instead of the whole workspace.
  /// Directories are walked recursively.
  #[arg(required = false)]
  pub paths: Vec<PathBuf>,

  /// Directory to start from (default: current directory)
  #[arg(long, value_name = "DIR")]
  pub root: Option<PathBuf>,

  /// Walk the directory tree instead of listing files through git
  #[arg(long)]
  pub no_git: bool,

  /// Check mode: report files that would change without modifying them
  #[arg(long)]
  pub check: bool,

  /// Print a unified diff of every pending change to stderr
  #[arg(long, requires = "check")]
  pub show_diff: bool,

  /// Save a unified diff of every pending change to a file
  #[arg(long, short = 'o', value_name = "FILE", requires = "check")]
  pub save_diff: Option<PathBuf>,

  /// Workspace-relative paths to leave alone (glob, repeatable)
  #[arg(long, short = 'e', value_name = "GLOB")]
  pub exclude: Vec<String>,

  /// Path to config file (default: .hdrsync.toml in workspace root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Write a JSON report of every file's outcome to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except changed paths and errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run with the given arguments.
///
/// Exits the process with status 1 in check mode when any file needs an
/// update. Enumeration failures are returned as errors.
pub fn run(args: RunArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;
  let start = args
    .root
    .as_ref()
    .map_or_else(|| current_dir.clone(), |root| current_dir.join(root));

  let workspace = resolve_workspace(&start, !args.no_git).context("Failed to resolve workspace")?;
  let workspace_root = workspace.root().to_path_buf();
  debug!(
    "Using {} workspace root: {}",
    if workspace.is_git() { "git" } else { "directory" },
    workspace_root.display()
  );

  let config = load_config(args.config.as_deref(), &workspace_root, args.no_config)?;
  let mut exclude_patterns = config.map(|c| c.exclude).unwrap_or_default();
  exclude_patterns.extend(args.exclude);

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  let diff_manager = if args.check && diff_manager.is_enabled() {
    diff_manager.init()?;
    Some(diff_manager)
  } else {
    None
  };

  let processor = Processor::new(ProcessorConfig {
    check_only: args.check,
    exclude_patterns,
    diff_manager,
    ..ProcessorConfig::new(workspace_root.clone())
  })?;

  let source: Box<dyn FileSource> = if args.paths.is_empty() {
    workspace.file_source()
  } else {
    Box::new(ListFileSource::new(args.paths, &current_dir))
  };

  let files = source.list_files().context("Failed to enumerate files")?;
  let (targets, mut file_reports) = processor.collect_targets(files);

  print_start_message(targets.len(), args.check);

  let start_time = Instant::now();
  file_reports.extend(processor.process_targets(&targets));
  let summary = ProcessingSummary::from_reports(&file_reports, start_time.elapsed());
  let categorized = CategorizedReports::from_reports(&file_reports);

  print_blank_line();
  if categorized.updated.is_empty() && categorized.failed.is_empty() {
    print_all_files_ok();
  } else {
    print_updated_files(&categorized.updated, Some(&workspace_root), args.check);
    if !categorized.failed.is_empty() {
      print_blank_line();
      print_failed_files(&categorized.failed, Some(&workspace_root));
    }
  }

  if !categorized.unchanged.is_empty() {
    print_blank_line();
    print_skipped_files(&categorized.unchanged, Some(&workspace_root));
  }

  print_blank_line();
  print_summary(&summary, args.check);

  if let Some(ref output_path) = args.report_json {
    write_json_report(output_path, &file_reports, &summary, args.check)?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  if args.check && !categorized.updated.is_empty() {
    print_blank_line();
    print_hint("Run without --check to write the canonical headers.");
    process::exit(1);
  }

  Ok(())
}
