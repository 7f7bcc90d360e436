//! Compiled rule table.
//!
//! A [`RuleTable`] maps path patterns to [`Rule`]s. Every key that matches a
//! path contributes its rule, so matches are additive rather than
//! first-wins. Entries are kept in key order for deterministic output.

use crate::config::{Config, ConfigError};
use crate::glob::{DirPrefix, GlobError, GlobPattern};

/// Allowed/disallowed file globs for one path pattern.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    allowed: Vec<GlobPattern>,
    disallowed: Vec<GlobPattern>,
}

impl Rule {
    /// Compiles a rule.
    ///
    /// `allowed` globs containing `**` match the relative path, the rest match
    /// the file name. `disallowed` globs always match the file name.
    ///
    /// # Errors
    ///
    /// Returns an error if any glob is empty.
    pub fn new<A, D>(allowed: &[A], disallowed: &[D]) -> Result<Self, GlobError>
    where
        A: AsRef<str>,
        D: AsRef<str>,
    {
        let allowed = allowed
            .iter()
            .map(|p| GlobPattern::entry(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let disallowed = disallowed
            .iter()
            .map(|p| GlobPattern::name(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            allowed,
            disallowed,
        })
    }

    /// Returns the allowed globs.
    #[must_use]
    pub fn allowed(&self) -> &[GlobPattern] {
        &self.allowed
    }

    /// Returns the disallowed globs.
    #[must_use]
    pub fn disallowed(&self) -> &[GlobPattern] {
        &self.disallowed
    }

    /// `false` only when the rule restricts names and none of its allowed
    /// globs match.
    #[must_use]
    pub fn permits(&self, name: &str, relative_path: &str) -> bool {
        self.allowed.is_empty()
            || self
                .allowed
                .iter()
                .any(|g| g.matches_entry(name, relative_path))
    }

    /// `true` when any disallowed glob matches the file name.
    #[must_use]
    pub fn forbids(&self, name: &str) -> bool {
        self.disallowed.iter().any(|g| g.matches(name))
    }
}

/// A rule together with the path pattern it is registered under.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    pattern: GlobPattern,
    prefix: DirPrefix,
    rule: Rule,
}

impl RuleEntry {
    /// Returns the key as written in the configuration.
    #[must_use]
    pub fn key(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the compiled key.
    #[must_use]
    pub fn pattern(&self) -> &GlobPattern {
        &self.pattern
    }

    /// Returns the rule.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Whether the walk should enter directory `dir` on behalf of this key.
    ///
    /// True when the key matches `dir` or `dir/`, or when `dir` can be an
    /// ancestor of a path the key matches.
    fn reaches(&self, dir: &str) -> bool {
        self.pattern.matches(dir)
            || self.pattern.matches(&format!("{dir}/"))
            || self.prefix.admits(dir)
    }
}

/// Immutable mapping from path pattern to rule.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
}

impl RuleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles every rule in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the rule key whose glob failed to compile.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut table = Self::new();
        for (key, raw) in &config.rules {
            let rule = Rule::new(raw.allowed.as_slice(), raw.disallowed.as_slice()).map_err(|e| {
                ConfigError::Pattern {
                    key: key.clone(),
                    source: e,
                }
            })?;
            table
                .insert(key, rule)
                .map_err(|e| ConfigError::Pattern {
                    key: key.clone(),
                    source: e,
                })?;
        }
        Ok(table)
    }

    /// Registers `rule` under `key`, replacing any rule with the same key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn insert(&mut self, key: &str, rule: Rule) -> Result<(), GlobError> {
        let entry = RuleEntry {
            pattern: GlobPattern::path(key)?,
            prefix: DirPrefix::new(key)?,
            rule,
        };
        match self.entries.binary_search_by(|e| e.key().cmp(key)) {
            Ok(i) => self.entries[i] = entry,
            Err(i) => self.entries.insert(i, entry),
        }
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn with_rule(mut self, key: &str, rule: Rule) -> Result<Self, GlobError> {
        self.insert(key, rule)?;
        Ok(self)
    }

    /// Entries whose key matches `relative_path`, in key order.
    pub fn matching<'a>(&'a self, relative_path: &'a str) -> impl Iterator<Item = &'a RuleEntry> {
        self.entries
            .iter()
            .filter(move |e| e.pattern.matches(relative_path))
    }

    /// Whether the walk should enter the directory at `relative_dir`.
    ///
    /// Directories no key reaches are never entered, so nothing beneath them
    /// is validated.
    #[must_use]
    pub fn should_descend(&self, relative_dir: &str) -> bool {
        self.entries.iter().any(|e| e.reaches(relative_dir))
    }

    /// All entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    fn table() -> RuleTable {
        RuleTable::new()
            .with_rule("app/**", Rule::new(&["page.tsx"], &["*.js"]).unwrap())
            .unwrap()
            .with_rule("src/components/ui/**", Rule::new(&["*.tsx", "*.ts"], NONE).unwrap())
            .unwrap()
            .with_rule("src/features/**", Rule::new(&["components/**", "index.ts"], NONE).unwrap())
            .unwrap()
    }

    #[test]
    fn entries_are_kept_in_key_order() {
        let t = table();
        let keys: Vec<&str> = t.iter().map(RuleEntry::key).collect();
        assert_eq!(keys, vec!["app/**", "src/components/ui/**", "src/features/**"]);
    }

    #[test]
    fn insert_replaces_same_key() {
        let mut t = table();
        t.insert("app/**", Rule::new(NONE, &["*.jsx"]).unwrap()).unwrap();
        assert_eq!(t.len(), 3);
        let app = t.iter().find(|e| e.key() == "app/**").unwrap();
        assert!(app.rule().allowed().is_empty());
        assert_eq!(app.rule().disallowed()[0].as_str(), "*.jsx");
    }

    #[test]
    fn matching_is_additive() {
        let t = table()
            .with_rule("src/**", Rule::new(NONE, &["*.md"]).unwrap())
            .unwrap();
        let keys: Vec<&str> = t
            .matching("src/components/ui/Button.tsx")
            .map(RuleEntry::key)
            .collect();
        assert_eq!(keys, vec!["src/**", "src/components/ui/**"]);
    }

    #[test]
    fn descends_into_declared_subtrees_and_their_ancestors() {
        let t = table();
        assert!(t.should_descend("app"));
        assert!(t.should_descend("app/dashboard"));
        assert!(t.should_descend("src"));
        assert!(t.should_descend("src/components"));
        assert!(t.should_descend("src/components/ui"));
        assert!(t.should_descend("src/features/auth"));
    }

    #[test]
    fn does_not_descend_into_undeclared_directories() {
        let t = table();
        assert!(!t.should_descend("node_modules"));
        assert!(!t.should_descend(".git"));
        assert!(!t.should_descend("src/redux"));
        assert!(!t.should_descend("public"));
    }

    #[test]
    fn descends_through_wildcard_segments() {
        let t = RuleTable::new()
            .with_rule("src/*/components/**", Rule::new(NONE, &["*.js"]).unwrap())
            .unwrap();
        assert!(t.should_descend("src"));
        assert!(t.should_descend("src/features"));
        assert!(t.should_descend("src/features/components"));
        assert!(!t.should_descend("src/features/hooks"));
        assert!(!t.should_descend("node_modules"));
    }

    #[test]
    fn empty_table_descends_nowhere() {
        assert!(!RuleTable::new().should_descend("src"));
    }

    #[test]
    fn permits_without_allowed_list() {
        let rule = Rule::new(NONE, &["*.md"]).unwrap();
        assert!(rule.permits("anything.bin", "docs/anything.bin"));
    }

    #[test]
    fn permits_nested_allowed_glob_by_path() {
        let rule = Rule::new(&["components/**", "index.ts"], NONE).unwrap();
        assert!(rule.permits("LoginForm.tsx", "src/features/auth/components/LoginForm.tsx"));
        assert!(rule.permits("index.ts", "src/features/auth/index.ts"));
        assert!(!rule.permits("api.ts", "src/features/auth/api.ts"));
    }

    #[test]
    fn forbids_by_name_only() {
        let rule = Rule::new(NONE, &["*.js"]).unwrap();
        assert!(rule.forbids("page.js"));
        assert!(!rule.forbids("page.tsx"));
    }

    #[test]
    fn from_config_names_the_bad_key() {
        let config = Config::parse(
            r#"
[rules."app/**"]
allowed = [""]
"#,
        )
        .unwrap();
        let err = RuleTable::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Pattern { ref key, .. } if key == "app/**"));
    }
}
