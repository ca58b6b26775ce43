//! Rule to forbid raw interactive HTML elements in UI components.
//!
//! Interactive elements come from the design system under
//! `@/components/ui/`, which carries styling and accessibility defaults.

use std::sync::LazyLock;

use regex::Regex;
use write_guard_core::{
    FileCategories, FileCategory, FileContext, Location, Rule, Suggestion, Violation,
};

use crate::pattern::compile;

/// Rule code for no-raw-html-elements.
pub const CODE: &str = "WG005";

/// Rule name for no-raw-html-elements.
pub const NAME: &str = "no-raw-html-elements";

/// Raw element tags and their design-system replacements.
const ELEMENTS: &[(&str, &str)] = &[
    ("button", "<Button> from @/components/ui/button"),
    ("input", "<Input> from @/components/ui/input"),
    ("textarea", "<Textarea> from @/components/ui/textarea"),
    ("select", "<Select> from @/components/ui/select"),
];

struct RawElement {
    opening_tag: Regex,
    replacement: &'static str,
}

static RAW_ELEMENTS: LazyLock<Vec<RawElement>> = LazyLock::new(|| {
    ELEMENTS
        .iter()
        .map(|(tag, replacement)| RawElement {
            opening_tag: compile(&format!(r"(?i)<{tag}\s")),
            replacement: *replacement,
        })
        .collect()
});

/// Forbids raw `<button>`, `<input>`, `<textarea>` and `<select>` tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRawHtmlElements;

impl NoRawHtmlElements {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoRawHtmlElements {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Components must use design-system elements instead of raw HTML"
    }

    fn applies_to(&self, categories: &FileCategories) -> bool {
        categories.contains(FileCategory::Component)
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (n, line) in ctx.lines() {
            for element in RAW_ELEMENTS.iter() {
                if !element.opening_tag.is_match(line) {
                    continue;
                }
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        Location::new(ctx.path, n),
                        "Raw HTML element detected. Use shadcn/ui.",
                    )
                    .with_found(line)
                    .with_suggestion(Suggestion::new(format!("Use {}", element.replacement))),
                );
            }
        }

        violations
    }
}
