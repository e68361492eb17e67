//! # hdrsync
//!
//! A tool that makes every eligible source file in a tree start with exactly
//! one canonical license header.
//!
//! Each file is classified into a comment-style family by its name. Files that
//! already start with the family's canonical header are left untouched. Other
//! files have any leading comment block removed and the canonical header
//! inserted, keeping a byte-order mark and an interpreter (`#!`) line in front.
//! Running the tool again changes nothing.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//!
//! use hdrsync::file_source::GitFileSource;
//! use hdrsync::processor::{Processor, ProcessorConfig, apply_header};
//! use hdrsync::styles::StyleFamily;
//!
//! fn main() -> anyhow::Result<()> {
//!     // A single file
//!     let changed = apply_header(Path::new("src/main.rs"), StyleFamily::Block)?;
//!     println!("main.rs changed: {changed}");
//!
//!     // A whole git work tree
//!     let root = PathBuf::from(".");
//!     let processor = Processor::new(ProcessorConfig::new(root.clone()))?;
//!     let reports = processor.process_source(&GitFileSource::new(root))?;
//!     println!("{} files considered", reports.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`styles`] - File name to style family mapping and the canonical headers
//! * [`processor`] - Header detection, stripping and replacement
//! * [`file_source`] - Where candidate paths come from
//! * [`logging`] - Output and diagnostic settings
//!
//! [`styles`]: crate::styles
//! [`processor`]: crate::processor
//! [`file_source`]: crate::file_source
//! [`logging`]: crate::logging

pub mod config;
pub mod diff;
pub mod file_filter;
pub mod file_source;
pub mod git;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod styles;
pub mod workspace;
