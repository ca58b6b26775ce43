//! Rule to forbid hardcoded palette colors in UI components.
//!
//! Components use semantic color roles (`bg-primary`, `text-muted-foreground`)
//! backed by CSS variables instead of fixed palette shades.
//!
//! # Detected Patterns
//!
//! `bg-*`, `text-*` and `border-*` utility classes on a named palette color
//! with a shade suffix, e.g. `bg-blue-500`, `text-slate-50`, `border-zinc-200`.
//! Each family reports at most its first match per line.

use std::sync::LazyLock;

use regex::Regex;
use write_guard_core::{
    FileCategories, FileCategory, FileContext, Location, Rule, Suggestion, Violation,
};

use crate::pattern::compile;

/// Rule code for no-hardcoded-colors.
pub const CODE: &str = "WG004";

/// Rule name for no-hardcoded-colors.
pub const NAME: &str = "no-hardcoded-colors";

/// Palette colors that must not be used directly.
const PALETTE: &[&str] = &[
    "blue", "red", "green", "yellow", "purple", "pink", "orange", "gray", "slate", "zinc",
];

/// Utility class families and the semantic classes to use instead.
const FAMILIES: &[(&str, &str)] = &[
    ("bg", "bg-primary/secondary/muted"),
    ("text", "text-primary/secondary/muted-foreground"),
    ("border", "border-primary/border"),
];

struct ColorFamily {
    pattern: Regex,
    replacement: &'static str,
}

static COLOR_FAMILIES: LazyLock<Vec<ColorFamily>> = LazyLock::new(|| {
    let palette = PALETTE.join("|");
    FAMILIES
        .iter()
        .map(|(prefix, replacement)| ColorFamily {
            pattern: compile(&format!(r"{prefix}-({palette})-\d{{2,3}}")),
            replacement: *replacement,
        })
        .collect()
});

/// Forbids palette color utility classes in components.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHardcodedColors;

impl NoHardcodedColors {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoHardcodedColors {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Components must use semantic color classes, not palette shades"
    }

    fn applies_to(&self, categories: &FileCategories) -> bool {
        categories.contains(FileCategory::Component)
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (n, line) in ctx.lines() {
            for family in COLOR_FAMILIES.iter() {
                let Some(m) = family.pattern.find(line) else {
                    continue;
                };
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        Location::new(ctx.path, n),
                        format!("Hardcoded color '{}'. Use CSS variables.", m.as_str()),
                    )
                    .with_found(line)
                    .with_suggestion(Suggestion::new(format!(
                        "Use {} instead",
                        family.replacement
                    ))),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "components/Card.tsx";

    fn check(content: &str) -> Vec<Violation> {
        NoHardcodedColors::new().check(&FileContext::new(PATH, content))
    }

    #[test]
    fn names_the_matched_token() {
        let violations = check(r#"<div className="p-4 bg-blue-500">"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Hardcoded color 'bg-blue-500'. Use CSS variables."
        );
        assert_eq!(
            violations[0].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Use bg-primary/secondary/muted instead")
        );
    }

    #[test]
    fn one_violation_per_family_per_line() {
        let violations =
            check(r#"<p className="text-gray-700 bg-red-50 border-zinc-200 text-slate-900">"#);
        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Hardcoded color 'bg-red-50'. Use CSS variables.",
                "Hardcoded color 'text-gray-700'. Use CSS variables.",
                "Hardcoded color 'border-zinc-200'. Use CSS variables.",
            ]
        );
    }

    #[test]
    fn requires_shade_suffix() {
        assert!(check(r#"<div className="bg-blue text-red-5">"#).is_empty());
    }

    #[test]
    fn semantic_classes_are_fine() {
        assert!(check(r#"<div className="bg-primary text-muted-foreground border">"#).is_empty());
    }

    #[test]
    fn unknown_palette_colors_are_ignored() {
        assert!(check(r#"<div className="bg-teal-500 text-indigo-600">"#).is_empty());
    }

    #[test]
    fn every_family_pattern_compiles() {
        assert_eq!(COLOR_FAMILIES.len(), FAMILIES.len());
    }
}
