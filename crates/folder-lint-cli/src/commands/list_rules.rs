//! List rules command implementation.

use anyhow::{Context, Result};
use folder_lint_core::{GlobPattern, RuleTable};
use std::path::Path;

/// Runs the list-rules command.
pub fn run(cwd: &Path, explicit_config: Option<&Path>) -> Result<()> {
    let (config, located) = super::load_config(cwd, explicit_config)?;
    let table = RuleTable::from_config(&config).context("Invalid rule table")?;

    println!(
        "Rules from {} ({} config):\n",
        located.path.display(),
        located.origin
    );

    if table.is_empty() {
        println!("  (no rules configured; nothing will be checked)");
        return Ok(());
    }

    println!("{:<30} {:<40} Disallowed", "Path pattern", "Allowed");
    println!("{}", "-".repeat(90));

    for entry in table.iter() {
        println!(
            "{:<30} {:<40} {}",
            entry.key(),
            join(entry.rule().allowed()),
            join(entry.rule().disallowed())
        );
    }

    println!("\nDirectories not reached by any pattern are not entered.");
    Ok(())
}

fn join(globs: &[GlobPattern]) -> String {
    if globs.is_empty() {
        return "-".to_string();
    }
    globs
        .iter()
        .map(GlobPattern::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
