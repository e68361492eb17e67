use std::sync::atomic::{AtomicU8, Ordering};

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Global output mode shared by the output module and [`info_log!`].
///
/// [`info_log!`]: crate::info_log
static OUTPUT_MODE: AtomicU8 = AtomicU8::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
  Normal = 0,
  Quiet = 1,
  Verbose = 2,
}

impl OutputMode {
  const fn from_u8(value: u8) -> Self {
    match value {
      1 => Self::Quiet,
      2 => Self::Verbose,
      _ => Self::Normal,
    }
  }
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
  /// Use colors when the output stream is a terminal
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Applies the mode to every `owo-colors` conditional color in the process.
  pub fn apply(self) {
    match self {
      Self::Auto => owo_colors::unset_override(),
      Self::Never => owo_colors::set_override(false),
      Self::Always => owo_colors::set_override(true),
    }
  }
}

pub fn set_verbose() {
  OUTPUT_MODE.store(OutputMode::Verbose as u8, Ordering::SeqCst);
}

pub fn set_quiet() {
  OUTPUT_MODE.store(OutputMode::Quiet as u8, Ordering::SeqCst);
}

/// Checks if verbose output is currently enabled.
pub fn is_verbose() -> bool {
  OutputMode::from_u8(OUTPUT_MODE.load(Ordering::SeqCst)) == OutputMode::Verbose
}

/// Checks if quiet mode is currently enabled.
pub fn is_quiet() -> bool {
  OutputMode::from_u8(OUTPUT_MODE.load(Ordering::SeqCst)) == OutputMode::Quiet
}

/// Maps CLI verbosity to a default filter directive.
pub const fn level_for(quiet: bool, verbose: u8) -> &'static str {
  if quiet {
    return "error";
  }
  match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// Installs the global tracing subscriber writing diagnostics to stderr.
///
/// `RUST_LOG` takes precedence over the CLI-derived level. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_tracing(quiet: bool, verbose: u8) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(quiet, verbose)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_level_for_verbosity() {
    assert_eq!(level_for(true, 0), "error");
    assert_eq!(level_for(false, 0), "warn");
    assert_eq!(level_for(false, 1), "info");
    assert_eq!(level_for(false, 2), "debug");
    assert_eq!(level_for(false, 7), "trace");
  }

  #[test]
  fn test_output_mode_from_u8_defaults_to_normal() {
    assert_eq!(OutputMode::from_u8(0), OutputMode::Normal);
    assert_eq!(OutputMode::from_u8(1), OutputMode::Quiet);
    assert_eq!(OutputMode::from_u8(2), OutputMode::Verbose);
    assert_eq!(OutputMode::from_u8(200), OutputMode::Normal);
  }
}
