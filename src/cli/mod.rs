//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod run;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use run::{RunArgs, run};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Normalize headers of every tracked and untracked, non-ignored file
  hdrsync

  # Report files that would change, with a diff, without writing
  hdrsync --check --show-diff

  # Only touch specific files or directories
  hdrsync src/main.rs tools/

  # Leave vendored code alone
  hdrsync --exclude \"third_party/**\"

  # Walk a directory that is not a git checkout
  hdrsync --no-git --root path/to/tree
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub run_args: RunArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use clap::CommandFactory;

  use super::*;
  use crate::logging::ColorMode;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_defaults() {
    let cli = Cli::try_parse_from(["hdrsync"]).expect("parse");
    let args = cli.run_args;
    assert!(args.paths.is_empty());
    assert!(!args.check);
    assert!(!args.no_git);
    assert_eq!(args.colors, ColorMode::Auto);
    assert_eq!(args.verbose, 0);
  }

  #[test]
  fn test_flags_parse() {
    let cli = Cli::try_parse_from([
      "hdrsync",
      "--check",
      "--show-diff",
      "--exclude",
      "vendor/**",
      "--exclude",
      "*.gen.rs",
      "-vv",
      "--colors",
      "never",
      "src/lib.rs",
    ])
    .expect("parse");
    let args = cli.run_args;
    assert!(args.check);
    assert!(args.show_diff);
    assert_eq!(args.exclude, vec!["vendor/**".to_string(), "*.gen.rs".to_string()]);
    assert_eq!(args.verbose, 2);
    assert_eq!(args.colors, ColorMode::Never);
    assert_eq!(args.paths, vec![PathBuf::from("src/lib.rs")]);
  }

  #[test]
  fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["hdrsync", "-q", "-v"]).is_err());
  }

  #[test]
  fn test_show_diff_requires_check() {
    assert!(Cli::try_parse_from(["hdrsync", "--show-diff"]).is_err());
  }
}
