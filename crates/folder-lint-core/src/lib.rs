//! # folder-lint-core
//!
//! Core engine for checking a project's directory layout against
//! declarative placement rules.
//!
//! This crate provides:
//!
//! - [`GlobPattern`] for the restricted `*` / `**` glob syntax
//! - [`RuleTable`] mapping path patterns to allowed/disallowed file globs
//! - [`Walker`] for the depth-first traversal
//! - [`Validator`] for per-file evaluation
//! - [`Analyzer`] for orchestrating a full check
//!
//! Only directories some rule reaches are entered; everything else is
//! listed and left alone, so undeclared trees such as `node_modules` cost
//! nothing.
//!
//! ## Example
//!
//! ```ignore
//! use folder_lint_core::{Analyzer, Config};
//!
//! let config = Config::from_file("folder-lint.toml".as_ref())?;
//! let result = Analyzer::builder().config(config).build()?.analyze()?;
//! print!("{}", folder_lint_core::report::render_text(&result));
//! std::process::exit(result.exit_code());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod glob;
mod rule;
mod types;
mod validator;
mod walker;

/// Report rendering.
pub mod report;
/// Path utilities.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use glob::{DirPrefix, GlobError, GlobPattern, MatchMode};
pub use rule::{Rule, RuleEntry, RuleTable};
pub use types::{LintResult, Violation, ViolationKind};
pub use validator::Validator;
pub use walker::{Entry, WalkControl, WalkError, Walker};
