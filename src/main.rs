//! # hdrsync
//!
//! Normalizes license header comments across a source tree.

mod cli;
mod config;
mod diff;
mod file_filter;
mod file_source;
mod git;
mod logging;
mod output;
mod processor;
mod report;
mod styles;
mod workspace;

use anyhow::Result;

use crate::cli::{Cli, run};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run(cli.run_args)
}
