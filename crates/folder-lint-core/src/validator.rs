//! Allowed/disallowed evaluation for a single entry.

use tracing::debug;

use crate::rule::RuleTable;
use crate::types::{Violation, ViolationKind};
use crate::walker::Entry;

/// Evaluates entries against a [`RuleTable`].
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    table: &'a RuleTable,
}

impl<'a> Validator<'a> {
    /// Creates a validator over `table`.
    #[must_use]
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// Returns every violation `entry` produces.
    ///
    /// Each rule whose key matches the entry's relative path is checked on
    /// its own. A rule with a non-empty `allowed` list yields
    /// [`ViolationKind::NotAllowed`] when no allowed glob matches, and any
    /// matching `disallowed` glob yields [`ViolationKind::Disallowed`]. The
    /// two checks are independent and findings from different rules are not
    /// deduplicated. Directories never produce violations.
    #[must_use]
    pub fn evaluate(&self, entry: &Entry) -> Vec<Violation> {
        if entry.is_dir {
            return Vec::new();
        }

        let mut violations = Vec::new();
        for matched in self.table.matching(&entry.relative_path) {
            let rule = matched.rule();

            if !rule.permits(&entry.name, &entry.relative_path) {
                debug!("{} not allowed by {}", entry.relative_path, matched.key());
                violations.push(Violation::new(
                    &entry.relative_path,
                    ViolationKind::NotAllowed,
                    matched.key(),
                ));
            }

            if rule.forbids(&entry.name) {
                debug!("{} disallowed by {}", entry.relative_path, matched.key());
                violations.push(Violation::new(
                    &entry.relative_path,
                    ViolationKind::Disallowed,
                    matched.key(),
                ));
            }
        }
        violations
    }
}
