//! Rule to forbid column picking in repository modules.
//!
//! Repository queries select every column (`select('*')`) so that returned
//! rows match the generated row types.
//!
//! # Detected Patterns
//!
//! - `.select('id, name')`, `.select("title")`
//!
//! # Allowed Patterns
//!
//! - `.select('*')` and `.select('*, author(*)')`
//! - lines containing `(*)`, which already select whole relations
//! - template literal arguments, `` .select(`*, ${relation}`) ``

use std::sync::LazyLock;

use regex::Regex;
use write_guard_core::{
    FileCategories, FileCategory, FileContext, Location, Rule, Suggestion, Violation,
};

use crate::pattern::compile;

/// Rule code for no-column-picking.
pub const CODE: &str = "WG003";

/// Rule name for no-column-picking.
pub const NAME: &str = "no-column-picking";

static COLUMN_SELECT: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"\.select\s*\(\s*["'][^*]"#));

/// Markers that exempt a line from the check.
const EXEMPT_MARKERS: &[&str] = &["(*)", "(`"];

/// Forbids selecting explicit columns in repository modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColumnPicking;

impl NoColumnPicking {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_column_pick(line: &str) -> bool {
    COLUMN_SELECT.is_match(line) && !EXEMPT_MARKERS.iter().any(|m| line.contains(m))
}

impl Rule for NoColumnPicking {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Repository queries must use select('*')"
    }

    fn applies_to(&self, categories: &FileCategories) -> bool {
        categories.contains(FileCategory::RepositoryModule)
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        ctx.lines()
            .filter(|(_, line)| is_column_pick(line))
            .map(|(n, line)| {
                Violation::new(
                    CODE,
                    NAME,
                    Location::new(ctx.path, n),
                    "Column picking detected. Use select('*') instead.",
                )
                .with_found(line)
                .with_suggestion(Suggestion::new(".select('*') for type safety"))
            })
            .collect()
    }
}
