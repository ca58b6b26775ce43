//! Block report shown to the editing agent.

use std::fmt::Write;

use write_guard_core::LintResult;

/// Renders the report printed when a write is blocked.
///
/// ```text
/// ⛔ Pattern Violations Detected
///
/// File: components/Card.tsx
///
/// 1. Line 4: Raw HTML element detected. Use shadcn/ui.
///   Found: <button onClick={save}>
///   Fix: Use <Button> from @/components/ui/button
///
///
/// Please fix these issues before proceeding.
/// See .claude/skills/ for pattern documentation.
/// ```
#[must_use]
pub fn block_report(result: &LintResult, docs_hint: &str) -> String {
    let mut report = String::from("⛔ Pattern Violations Detected\n\n");
    let _ = write!(report, "File: {}\n\n", result.path.display());

    for (i, description) in result.descriptions().iter().enumerate() {
        let _ = write!(report, "{}. {description}\n\n", i + 1);
    }

    report.push_str("\nPlease fix these issues before proceeding.\n");
    let _ = writeln!(report, "{docs_hint}");
    report
}
