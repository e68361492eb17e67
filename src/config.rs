//! # Configuration Module
//!
//! This module loads the optional `.hdrsync.toml` configuration file. The
//! file only controls which paths are left alone; the style table and the
//! canonical headers are fixed at build time.
//!
//! ```toml
//! exclude = ["third_party/**", "src/generated/*.rs"]
//! ```
//!
//! The file can also be selected with `--config` or the `HDRSYNC_CONFIG`
//! environment variable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".hdrsync.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "HDRSYNC_CONFIG";

/// Main configuration struct.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Glob patterns of workspace-relative paths that are never modified.
  #[serde(default)]
  pub exclude: Vec<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// An exclude entry is not a valid glob.
  #[error("Invalid exclude pattern '{pattern}': {source}")]
  InvalidPattern {
    pattern: String,
    source: glob::PatternError,
  },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;
    debug!("Loaded {} exclude patterns", config.exclude.len());
    Ok(config)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    for pattern in &self.exclude {
      glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.clone(),
        source,
      })?;
    }
    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `HDRSYNC_CONFIG` environment variable
/// 3. `.hdrsync.toml` in the workspace root
pub fn discover_config_path(explicit_path: Option<&Path>, workspace_root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      debug!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    debug!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let workspace_config = workspace_root.join(DEFAULT_CONFIG_FILENAME);
  if workspace_config.exists() {
    debug!("Using workspace config: {}", workspace_config.display());
    return Some(workspace_config);
  }

  debug!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// An explicit `--config` path that does not exist is an error; a missing
/// workspace config simply means no config.
pub fn load_config(explicit_path: Option<&Path>, workspace_root: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    debug!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, workspace_root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
