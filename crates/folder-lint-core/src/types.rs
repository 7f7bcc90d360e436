//! Core types for layout violations and results.

use serde::{Deserialize, Serialize};

/// Why a file was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// The file sits under a restricted path but matches none of its
    /// allowed globs.
    NotAllowed,
    /// The file name matches an explicitly forbidden glob.
    Disallowed,
}

impl ViolationKind {
    /// Stable short code, used by the compact output.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::NotAllowed => "FL001",
            Self::Disallowed => "FL002",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAllowed => write!(f, "not-allowed"),
            Self::Disallowed => write!(f, "disallowed"),
        }
    }
}

/// A file found in the wrong place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// `/`-separated path relative to the base directory.
    pub path: String,
    /// Kind of violation.
    pub kind: ViolationKind,
    /// Rule key that produced it.
    pub pattern: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(path: impl Into<String>, kind: ViolationKind, pattern: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            pattern: pattern.into(),
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        match self.kind {
            ViolationKind::NotAllowed => {
                format!("File {} is not allowed in this location", self.path)
            }
            ViolationKind::Disallowed => {
                format!("File {} is disallowed in this location", self.path)
            }
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Result of one layout check.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations, in discovery order.
    pub violations: Vec<Violation>,
    /// Number of files evaluated.
    pub files_checked: usize,
    /// Number of directories listed but not entered.
    pub dirs_skipped: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Process exit status for this result: `0` when clean, `1` otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_clean())
    }

    /// Violations of the given kind.
    #[must_use]
    pub fn by_kind(&self, kind: ViolationKind) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.kind == kind).collect()
    }

    /// Counts violations as `(not_allowed, disallowed)`.
    #[must_use]
    pub fn count_by_kind(&self) -> (usize, usize) {
        let not_allowed = self
            .violations
            .iter()
            .filter(|v| v.kind == ViolationKind::NotAllowed)
            .count();
        (not_allowed, self.violations.len() - not_allowed)
    }
}
