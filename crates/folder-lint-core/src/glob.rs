//! Restricted glob syntax compiled to regular expressions.
//!
//! Only two wildcards exist:
//!
//! - `*` matches any run of characters within a segment
//! - `**` matches any run of characters, including `/`
//!
//! Everything else is literal. Patterns are compiled once and matched
//! **unanchored**: a hit anywhere in the subject counts, so `*.ts` also
//! matches `Button.tsx` and a key `app` matches `src/app/page.tsx`.

use miette::Diagnostic;
use regex::Regex;

/// What a compiled pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Matched against a `/`-separated path relative to the base directory.
    Path,
    /// Matched against a bare file name.
    Name,
}

/// Errors raised while compiling a glob.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum GlobError {
    /// The pattern is empty and would match everything.
    #[error("empty glob pattern")]
    #[diagnostic(
        code(folder_lint::glob::empty),
        help("remove the entry or write `**` to match every path explicitly")
    )]
    Empty,

    /// The generated expression was rejected by the regex engine.
    #[error("invalid glob pattern `{pattern}`: {source}")]
    #[diagnostic(code(folder_lint::glob::invalid))]
    Invalid {
        /// The offending pattern.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}

/// A pre-compiled glob pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    mode: MatchMode,
    regex: Regex,
}

impl GlobPattern {
    /// Compiles a pattern in path mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty.
    pub fn path(pattern: &str) -> Result<Self, GlobError> {
        Self::compile(pattern, MatchMode::Path)
    }

    /// Compiles a pattern in name mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty.
    pub fn name(pattern: &str) -> Result<Self, GlobError> {
        Self::compile(pattern, MatchMode::Name)
    }

    /// Compiles an `allowed` entry: path mode when it contains `**`,
    /// name mode otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty.
    pub fn entry(pattern: &str) -> Result<Self, GlobError> {
        if pattern.contains("**") {
            Self::path(pattern)
        } else {
            Self::name(pattern)
        }
    }

    fn compile(pattern: &str, mode: MatchMode) -> Result<Self, GlobError> {
        if pattern.is_empty() {
            return Err(GlobError::Empty);
        }
        let source = to_regex(pattern, mode);
        let regex = Regex::new(&source).map_err(|e| GlobError::Invalid {
            pattern: pattern.to_string(),
            source: e,
        })?;
        Ok(Self {
            raw: pattern.to_string(),
            mode,
            regex,
        })
    }

    /// Tests the pattern against `subject` (unanchored).
    #[must_use]
    pub fn matches(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }

    /// Tests the pattern against a directory entry, picking the subject
    /// by mode: the relative path in path mode, the file name otherwise.
    #[must_use]
    pub fn matches_entry(&self, name: &str, relative_path: &str) -> bool {
        match self.mode {
            MatchMode::Path => self.matches(relative_path),
            MatchMode::Name => self.matches(name),
        }
    }

    /// Returns the match mode.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Decides whether a directory can lie on the way to paths a key matches.
///
/// Built from the key's leading segments: a directory `d` is admitted when
/// `d/` could begin a string the key matches, read from the start of the
/// path. `*` stays within its segment. From the first `**` on, anything is
/// admitted, so `**/__tests__/**` admits every directory.
#[derive(Debug, Clone)]
pub struct DirPrefix {
    regex: Regex,
}

impl DirPrefix {
    /// Compiles the prefix matcher for a path-mode key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn new(key: &str) -> Result<Self, GlobError> {
        if key.is_empty() {
            return Err(GlobError::Empty);
        }
        let source = prefix_regex(key);
        let regex = Regex::new(&source).map_err(|e| GlobError::Invalid {
            pattern: key.to_string(),
            source: e,
        })?;
        Ok(Self { regex })
    }

    /// Tests whether the directory at `relative_dir` may contain a match.
    #[must_use]
    pub fn admits(&self, relative_dir: &str) -> bool {
        self.regex.is_match(&format!("{relative_dir}/"))
    }
}

// `src/*/components/**` becomes `^src/(?:[^/]*/(?:components/(?:.*)?)?)?$`.
// The last segment is left out unless it holds `**`: a directory matching it
// is the key's target, not an ancestor, and `matches` already covers it.
fn prefix_regex(key: &str) -> String {
    let segments: Vec<&str> = key.split('/').collect();
    let mut out = String::from("^");
    let mut open = 0;

    for (i, segment) in segments.iter().enumerate() {
        let deep = segment.find("**");
        if deep.is_none() && i + 1 == segments.len() {
            break;
        }
        if i > 0 {
            out.push_str("(?:");
            open += 1;
        }
        if let Some(at) = deep {
            out.push_str(&segment_regex(&segment[..at]));
            out.push_str(".*");
            break;
        }
        out.push_str(&segment_regex(segment));
        out.push('/');
    }

    for _ in 0..open {
        out.push_str(")?");
    }
    out.push('$');
    out
}

fn segment_regex(segment: &str) -> String {
    regex::escape(segment).replace(r"\*", "[^/]*")
}

fn to_regex(pattern: &str, mode: MatchMode) -> String {
    let escaped = regex::escape(pattern);
    match mode {
        MatchMode::Path => escaped.replace(r"\*\*", ".*").replace(r"\*", "[^/]*"),
        MatchMode::Name => escaped.replace(r"\*", ".*"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_mode_crosses_segments() {
        let p = GlobPattern::path("src/lib/**").unwrap();
        assert!(p.matches("src/lib/api/auth.ts"));
        assert!(p.matches("src/lib/"));
        assert!(!p.matches("src/lib"));
        assert!(!p.matches("src/components/Button.tsx"));
    }

    #[test]
    fn path_mode_is_unanchored() {
        let p = GlobPattern::path("app").unwrap();
        assert!(p.matches("app"));
        assert!(p.matches("src/app/page.tsx"));
        assert!(p.matches("webapp"));
    }

    #[test]
    fn path_mode_single_star_stays_in_segment() {
        let p = GlobPattern::path("src/*/index.ts").unwrap();
        assert!(p.matches("src/hooks/index.ts"));
        assert!(!p.matches("src/hooks/auth/index.ts"));
    }

    #[test]
    fn name_mode_star_is_any_run() {
        let p = GlobPattern::name("*.tsx").unwrap();
        assert!(p.matches("Button.tsx"));
        assert!(!p.matches("Button.css"));
    }

    #[test]
    fn name_mode_is_unanchored() {
        let p = GlobPattern::name("*.ts").unwrap();
        assert!(p.matches("Button.tsx"));
        let js = GlobPattern::name("*.js").unwrap();
        assert!(js.matches("data.json"));
    }

    #[test]
    fn metacharacters_are_literal() {
        let p = GlobPattern::name("page.tsx").unwrap();
        assert!(p.matches("page.tsx"));
        assert!(!p.matches("pageXtsx"));

        let q = GlobPattern::path("(group)/**").unwrap();
        assert!(q.matches("app/(group)/page.tsx"));
    }

    #[test]
    fn entry_picks_mode_by_double_star() {
        assert_eq!(GlobPattern::entry("*.ts").unwrap().mode(), MatchMode::Name);
        assert_eq!(
            GlobPattern::entry("components/**").unwrap().mode(),
            MatchMode::Path
        );
    }

    #[test]
    fn matches_entry_uses_subject_for_mode() {
        let nested = GlobPattern::entry("components/**").unwrap();
        assert!(nested.matches_entry(
            "LoginForm.tsx",
            "src/features/auth/components/LoginForm.tsx"
        ));
        assert!(!nested.matches_entry("LoginForm.tsx", "src/features/auth/LoginForm.tsx"));

        let flat = GlobPattern::entry("index.ts").unwrap();
        assert!(flat.matches_entry("index.ts", "src/features/auth/index.ts"));
        assert!(!flat.matches_entry("main.ts", "src/index.ts/main.ts"));
    }

    #[test]
    fn dir_prefix_follows_literal_segments() {
        let p = DirPrefix::new("src/components/ui/**").unwrap();
        assert!(p.admits("src"));
        assert!(p.admits("src/components"));
        assert!(p.admits("src/components/ui"));
        assert!(p.admits("src/components/ui/forms"));
        assert!(!p.admits("src/redux"));
        assert!(!p.admits("lib"));
    }

    #[test]
    fn dir_prefix_star_stays_in_segment() {
        let p = DirPrefix::new("src/*/components/**").unwrap();
        assert!(p.admits("src"));
        assert!(p.admits("src/features"));
        assert!(p.admits("src/features/components"));
        assert!(p.admits("src/features/components/forms"));
        assert!(!p.admits("src/features/hooks"));
        assert!(!p.admits("lib/features"));
    }

    #[test]
    fn dir_prefix_leading_double_star_admits_everything() {
        let p = DirPrefix::new("**/__tests__/**").unwrap();
        assert!(p.admits("src"));
        assert!(p.admits("node_modules"));
    }

    #[test]
    fn dir_prefix_excludes_the_key_target_itself() {
        // `app` names the target; only its ancestors are prefixes.
        let p = DirPrefix::new("app").unwrap();
        assert!(!p.admits("app"));

        let q = DirPrefix::new("src/comp*").unwrap();
        assert!(q.admits("src"));
        assert!(!q.admits("src/components"));
    }

    #[test]
    fn dir_prefix_double_star_mid_segment() {
        let p = DirPrefix::new("src/a**").unwrap();
        assert!(p.admits("src"));
        assert!(p.admits("src/api/v1"));
        assert!(!p.admits("src/lib"));
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert!(matches!(GlobPattern::path(""), Err(GlobError::Empty)));
        assert!(matches!(GlobPattern::name(""), Err(GlobError::Empty)));
        assert!(matches!(DirPrefix::new(""), Err(GlobError::Empty)));
    }
}
