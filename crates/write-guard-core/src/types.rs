//! Core types for lint violations and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Position of a violation inside the proposed content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Target path of the proposed write.
    pub file: PathBuf,
    /// Line number (1-indexed). `0` means the violation concerns the whole file.
    pub line: usize,
}

impl Location {
    /// Creates a location pointing at a single line.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Creates a location that refers to the file as a whole.
    #[must_use]
    pub fn whole_file(file: impl Into<PathBuf>) -> Self {
        Self::new(file, 0)
    }

    /// Returns true if this location does not point at a specific line.
    #[must_use]
    pub fn is_whole_file(&self) -> bool {
        self.line == 0
    }
}

/// A suggested fix for a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A lint violation found in proposed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "WG001").
    pub code: String,
    /// Rule name (e.g., "no-direct-client-query").
    pub rule: String,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// The offending text, trimmed of surrounding whitespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            location,
            message: message.into(),
            found: None,
            suggestion: None,
        }
    }

    /// Records the offending source text. Surrounding whitespace is dropped.
    #[must_use]
    pub fn with_found(mut self, text: &str) -> Self {
        self.found = Some(text.trim().to_string());
        self
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Renders the free-text description shown to the editing agent.
    ///
    /// Line-level violations span several lines:
    ///
    /// ```text
    /// Line 3: Direct Supabase query in server action. Use repository function instead.
    ///   Found: const { data } = await supabase.from('users').select()
    ///   Fix: Import from @/app/_shared/repositories/
    /// ```
    ///
    /// Whole-file violations are a single sentence pair.
    #[must_use]
    pub fn describe(&self) -> String {
        use std::fmt::Write;

        if self.location.is_whole_file() {
            return match &self.suggestion {
                Some(suggestion) => format!("{} {}", self.message, suggestion.message),
                None => self.message.clone(),
            };
        }

        let mut output = format!("Line {}: {}", self.location.line, self.message);
        if let Some(found) = &self.found {
            let _ = write!(output, "\n  Found: {found}");
        }
        if let Some(suggestion) = &self.suggestion {
            let _ = write!(output, "\n  Fix: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.code,
            self.message
        )
    }
}

/// Result of checking one proposed write.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    /// Target path of the proposed write.
    pub path: PathBuf,
    /// Violations in rule order, then line order.
    pub violations: Vec<Violation>,
}

impl LintResult {
    /// Creates an empty result for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            violations: Vec::new(),
        }
    }

    /// Returns true when no rule fired.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the rendered descriptions of all violations, in order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.violations.iter().map(Violation::describe).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_violation() -> Violation {
        Violation::new(
            "WG001",
            "no-direct-client-query",
            Location::new("app/actions/user.actions.ts", 3),
            "Direct Supabase query in server action. Use repository function instead.",
        )
        .with_found("    const { data } = await supabase.from('users').select()  ")
        .with_suggestion(Suggestion::new("Import from @/app/_shared/repositories/"))
    }

    #[test]
    fn describe_line_violation_includes_found_and_fix() {
        let text = line_violation().describe();
        assert_eq!(
            text,
            "Line 3: Direct Supabase query in server action. Use repository function instead.\n  \
             Found: const { data } = await supabase.from('users').select()\n  \
             Fix: Import from @/app/_shared/repositories/"
        );
    }

    #[test]
    fn describe_whole_file_violation_is_single_line() {
        let v = Violation::new(
            "WG006",
            "protected-file",
            Location::whole_file("src/lib/database.types.ts"),
            "Protected file: database.types.ts is auto-generated.",
        )
        .with_suggestion(Suggestion::new("Run 'npm run db:types' instead."));

        assert_eq!(
            v.describe(),
            "Protected file: database.types.ts is auto-generated. Run 'npm run db:types' instead."
        );
    }

    #[test]
    fn describe_without_suggestion() {
        let v = Violation::new(
            "WG999",
            "custom",
            Location::new("a.ts", 7),
            "Something odd",
        );
        assert_eq!(v.describe(), "Line 7: Something odd");
    }

    #[test]
    fn display_is_compact() {
        insta::assert_snapshot!(
            line_violation().to_string(),
            @"app/actions/user.actions.ts:3: [WG001] Direct Supabase query in server action. Use repository function instead."
        );
    }

    #[test]
    fn found_is_trimmed() {
        assert_eq!(
            line_violation().found.as_deref(),
            Some("const { data } = await supabase.from('users').select()")
        );
    }

    #[test]
    fn lint_result_descriptions() {
        let mut result = LintResult::new("a.ts");
        assert!(result.is_clean());
        result.violations.push(line_violation());
        assert!(!result.is_clean());
        assert_eq!(result.descriptions(), vec![line_violation().describe()]);
    }
}
