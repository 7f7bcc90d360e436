//! Orchestrates a layout check: walk the tree, validate every file, collect
//! the findings.

use crate::config::{Config, ConfigError};
use crate::rule::RuleTable;
use crate::types::LintResult;
use crate::validator::Validator;
use crate::walker::{WalkControl, WalkError, Walker};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error resolving the working directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tree could not be read.
    #[error(transparent)]
    Walk(#[from] WalkError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    base: Option<PathBuf>,
    table: Option<RuleTable>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory to scan. Overrides `analyzer.root` from the config.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the directory relative paths are computed from
    /// (default: the process working directory).
    #[must_use]
    pub fn base(mut self, path: impl Into<PathBuf>) -> Self {
        self.base = Some(path.into());
        self
    }

    /// Uses an already compiled rule table instead of the config's rules.
    #[must_use]
    pub fn rules(mut self, table: RuleTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer, compiling the config's rules if no table was given.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule fails to compile or the working directory
    /// cannot be determined.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let table = match self.table {
            Some(table) => table,
            None => RuleTable::from_config(&config)?,
        };
        if table.is_empty() {
            warn!("Rule table is empty; no directory will be entered");
        }

        let base = match self.base {
            Some(base) => base,
            None => std::env::current_dir()?,
        };
        let root = self.root.unwrap_or(config.analyzer.root);

        Ok(Analyzer {
            walker: Walker::new(root, base),
            table,
        })
    }
}

/// Runs a layout check.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    walker: Walker,
    table: RuleTable,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the resolved scan root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    /// Returns the rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.table
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.table.len()
    }

    /// Walks the tree and returns every violation in discovery order.
    ///
    /// Directories no rule reaches are counted in
    /// [`LintResult::dirs_skipped`] and never entered.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be read.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.walker.root());

        let validator = Validator::new(&self.table);
        let mut result = LintResult::new();

        self.walker.walk(|entry| {
            if entry.is_dir {
                if self.table.should_descend(&entry.relative_path) {
                    return WalkControl::Descend;
                }
                debug!("Skipping undeclared directory: {}", entry.relative_path);
                result.dirs_skipped += 1;
                return WalkControl::Skip;
            }

            debug!("Checking {}", entry.relative_path);
            result.files_checked += 1;
            result.violations.extend(validator.evaluate(entry));
            WalkControl::Descend
        })?;

        info!(
            "Analysis complete: {} violations in {} files ({} directories skipped)",
            result.violations.len(),
            result.files_checked,
            result.dirs_skipped
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builder_uses_config_root() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("web")).unwrap();
        let config = Config::parse("[analyzer]\nroot = \"web\"\n").unwrap();

        let analyzer = Analyzer::builder()
            .base(tmp.path())
            .config(config)
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.root().ends_with("web"));
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn test_explicit_root_overrides_config() {
        let tmp = TempDir::new().unwrap();
        let config = Config::parse("[analyzer]\nroot = \"web\"\n").unwrap();

        let analyzer = Analyzer::builder()
            .base(tmp.path())
            .root("site")
            .config(config)
            .build()
            .unwrap();

        assert!(analyzer.root().ends_with("site"));
    }

    #[test]
    fn test_explicit_table_wins_over_config_rules() {
        let config = Config::parse("[rules.\"app/**\"]\ndisallowed = [\"*.js\"]\n").unwrap();
        let table = RuleTable::new()
            .with_rule("src/**", Rule::new(&["*.ts"], &["*.md"]).unwrap())
            .unwrap()
            .with_rule("lib/**", Rule::new(&["*.rs"], &["*.md"]).unwrap())
            .unwrap();

        let analyzer = Analyzer::builder()
            .base(".")
            .config(config)
            .rules(table)
            .build()
            .unwrap();

        assert_eq!(analyzer.rule_count(), 2);
    }

    #[test]
    fn test_bad_rule_fails_build() {
        let config = Config::parse("[rules.\"app/**\"]\nallowed = [\"\"]\n").unwrap();
        let err = Analyzer::builder().base(".").config(config).build().err();
        assert!(matches!(err, Some(AnalyzerError::Config(ConfigError::Pattern { .. }))));
    }

    #[test]
    fn test_counts_files_and_skipped_dirs() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("app")).unwrap();
        fs::create_dir_all(tmp.path().join("node_modules/pkg")).unwrap();
        fs::write(tmp.path().join("app/page.js"), "").unwrap();
        fs::write(tmp.path().join("node_modules/pkg/index.js"), "").unwrap();
        fs::write(tmp.path().join("package.json"), "").unwrap();

        let table = RuleTable::new()
            .with_rule("app/**", Rule::new(&[] as &[&str], &["*.js"]).unwrap())
            .unwrap();
        let result = Analyzer::builder()
            .base(tmp.path())
            .rules(table)
            .build()
            .unwrap()
            .analyze()
            .unwrap();

        assert_eq!(result.files_checked, 2);
        assert_eq!(result.dirs_skipped, 1);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].path, "app/page.js");
    }
}
