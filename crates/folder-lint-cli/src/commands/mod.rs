//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use folder_lint_core::Config;
use std::path::Path;

use crate::config_resolver::{self, Located, Origin};

/// Locates and parses the configuration for a run started in `cwd`.
pub fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<(Config, Located)> {
    let located = config_resolver::locate(cwd, explicit)?;
    if located.origin == Origin::Global {
        tracing::info!("Using global config: {}", located.path.display());
    }
    let config = Config::from_file(&located.path)
        .with_context(|| format!("Failed to load config: {}", located.path.display()))?;
    Ok((config, located))
}
