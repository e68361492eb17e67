//! # Logging Module
//!
//! This module holds the process-wide output settings:
//! - Output mode (normal, quiet, verbose) consulted by the output module
//! - Color mode applied to `owo-colors`
//! - Installation of the `tracing` subscriber used for diagnostics
//!
//! Diagnostics (`tracing` events) go to stderr; user-facing listings go to
//! stdout so they can be piped.
//!
//! ## Example
//!
//! ```rust
//! use hdrsync::info_log;
//! use hdrsync::logging::{ColorMode, set_verbose};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! info_log!("Wrote report to {}", "report.json");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, level_for, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stdout unless quiet mode is enabled.
///
/// It uses the same format string syntax as the standard [`println!`] macro.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an [`info_log!`] message, dimmed when colors are enabled.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.dimmed()));
}
