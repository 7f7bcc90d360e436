//! Configuration types for folder-lint.
//!
//! These are the raw TOML shapes. [`RuleTable::from_config`] turns them into
//! compiled rules.
//!
//! [`RuleTable::from_config`]: crate::RuleTable::from_config

use miette::Diagnostic;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::glob::GlobError;

/// Top-level configuration for folder-lint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Placement rules keyed by path pattern.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Directory to scan, relative to the working directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// A single placement rule as written in TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// File globs permitted under the matched path. Empty means no restriction.
    #[serde(default)]
    pub allowed: Vec<String>,

    /// File name globs forbidden under the matched path.
    #[serde(default)]
    pub disallowed: Vec<String>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(folder_lint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(
        code(folder_lint::config::parse),
        help("rules look like `[rules.\"app/**\"]` with optional `allowed` and `disallowed` arrays")
    )]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A glob in the rule table failed to compile.
    #[error("rules.\"{key}\": {source}")]
    #[diagnostic(code(folder_lint::config::pattern))]
    Pattern {
        /// Rule key the glob belongs to.
        key: String,
        /// Compilation error.
        #[source]
        #[diagnostic_source]
        source: GlobError,
    },
}
