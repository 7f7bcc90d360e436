//! Plain-text renderings of a [`LintResult`].

use std::fmt::Write;

use crate::types::LintResult;

/// Line printed when no violations were found.
pub const SUCCESS_LINE: &str = "✓ Folder structure is valid";

/// Header printed above the violation list.
pub const FAILURE_HEADER: &str = "Folder structure validation failed:";

/// Renders the default report.
///
/// A clean result is a single success line. Otherwise a header is followed
/// by one bullet per violation in discovery order.
#[must_use]
pub fn render_text(result: &LintResult) -> String {
    if result.is_clean() {
        return format!("{SUCCESS_LINE}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "{FAILURE_HEADER}");
    for violation in &result.violations {
        let _ = writeln!(out, "  - {violation}");
    }
    out
}

/// Renders one line per violation: `path: [code] kind (pattern)`.
#[must_use]
pub fn render_compact(result: &LintResult) -> String {
    let mut out = String::new();
    for v in &result.violations {
        let _ = writeln!(
            out,
            "{}: [{}] {} ({})",
            v.path,
            v.kind.code(),
            v.kind,
            v.pattern
        );
    }
    out
}
