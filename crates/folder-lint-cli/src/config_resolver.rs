//! Locating the configuration file.
//!
//! Candidates are tried in a fixed order and the first existing file wins:
//!
//! 1. `--config` flag (must exist)
//! 2. `{cwd}/folder-lint.toml`, then `{cwd}/.folder-lint.toml`
//! 3. `$FOLDER_LINT_CONFIG_DIR/config.toml` or `~/.folder-lint/config.toml`
//!
//! A run without rules checks nothing, so running out of candidates is an
//! error listing every path that was tried.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["folder-lint.toml", ".folder-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Which step of the search produced the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Given with `--config`.
    Flag,
    /// Found in the working directory.
    Project,
    /// Found in the global config directory.
    Global,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--config"),
            Self::Project => write!(f, "project"),
            Self::Global => write!(f, "global"),
        }
    }
}

/// A config file that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Path to the file.
    pub path: PathBuf,
    /// How it was found.
    pub origin: Origin,
}

/// Why no config file could be used.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The `--config` path does not name a file.
    #[error("config file given with --config does not exist: {}", .0.display())]
    MissingExplicit(PathBuf),

    /// None of the candidates exist.
    #[error(
        "no folder-lint config found (looked for {}). Run `folder-lint init` to create one.",
        join_paths(.searched)
    )]
    NotFound {
        /// Every candidate, in search order.
        searched: Vec<PathBuf>,
    },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Finds the config file for a run started in `cwd`.
///
/// # Errors
///
/// Returns an error if `--config` names a missing file or no candidate exists.
pub fn locate(cwd: &Path, explicit: Option<&Path>) -> Result<Located, LocateError> {
    locate_in(cwd, explicit, global_config_dir())
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn locate_in(
    cwd: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> Result<Located, LocateError> {
    // 1. Explicit path from --config flag, relative to the working directory
    if let Some(p) = explicit {
        let path = cwd.join(p);
        if !path.is_file() {
            return Err(LocateError::MissingExplicit(path));
        }
        return Ok(Located {
            path,
            origin: Origin::Flag,
        });
    }

    let mut searched = Vec::new();

    // 2. Project-level config
    for name in PROJECT_CONFIG_NAMES {
        let candidate = cwd.join(name);
        if candidate.is_file() {
            tracing::debug!("Found project config: {}", candidate.display());
            return Ok(Located {
                path: candidate,
                origin: Origin::Project,
            });
        }
        searched.push(candidate);
    }

    // 3. Global fallback
    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.is_file() {
            tracing::debug!("Found global config: {}", candidate.display());
            return Ok(Located {
                path: candidate,
                origin: Origin::Global,
            });
        }
        searched.push(candidate);
    }

    Err(LocateError::NotFound { searched })
}

/// Returns the global config directory path.
///
/// Resolution: `$FOLDER_LINT_CONFIG_DIR` > `~/.folder-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FOLDER_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".folder-lint"))
}
