//! folder-lint CLI tool.
//!
//! Usage:
//! ```bash
//! folder-lint                  # same as `folder-lint check`
//! folder-lint check [OPTIONS] [PATH]
//! folder-lint list-rules
//! folder-lint init
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Directory layout linter: keeps files where the rules say they belong
#[derive(Parser)]
#[command(name = "folder-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the directory layout (default)
    Check {
        /// Directory to scan (default: `analyzer.root` from config, else `.`)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the configured placement rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Success line, or a header and one bullet per violation.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One line per violation with its code and rule key.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to read working directory")?;

    match cli.command.unwrap_or(Commands::Check {
        path: None,
        format: OutputFormat::Text,
    }) {
        Commands::Check { path, format } => {
            commands::check::run(&cwd, path.as_deref(), format, cli.config.as_deref())
        }
        Commands::ListRules => commands::list_rules::run(&cwd, cli.config.as_deref()),
        Commands::Init { force } => commands::init::run(&cwd, force),
    }
}
