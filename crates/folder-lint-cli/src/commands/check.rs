//! Check command implementation.

use anyhow::{Context, Result};
use folder_lint_core::Analyzer;
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
///
/// Exits the process with status 1 when any violation is found.
pub fn run(
    cwd: &Path,
    path: Option<&Path>,
    format: OutputFormat,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let (config, _) = super::load_config(cwd, explicit_config)?;

    let mut builder = Analyzer::builder().base(cwd).config(config);
    if let Some(path) = path {
        builder = builder.root(path);
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Checking {} with {} rules",
        analyzer.root().display(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Layout check failed")?;

    super::output::print(&result, format)?;

    if !result.is_clean() {
        std::process::exit(result.exit_code());
    }

    Ok(())
}
