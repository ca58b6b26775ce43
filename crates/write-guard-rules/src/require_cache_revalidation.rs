//! Rule to require cache revalidation in server actions that mutate data.
//!
//! # Detected Patterns
//!
//! Any line containing `insert`, `update` or `delete` as a whole word
//! (case-insensitive) while no line of the content calls `revalidatePath`.
//!
//! # Limitations
//!
//! The check is a presence heuristic. A `revalidatePath` call anywhere in
//! the content satisfies it, whether or not it follows the mutation or sits
//! in the same code path.

use std::sync::LazyLock;

use regex::Regex;
use write_guard_core::{
    FileCategories, FileCategory, FileContext, Location, Rule, RuleScope, Suggestion, Violation,
};

use crate::pattern::compile;

/// Rule code for require-cache-revalidation.
pub const CODE: &str = "WG002";

/// Rule name for require-cache-revalidation.
pub const NAME: &str = "require-cache-revalidation";

/// Call that invalidates the cache.
const REVALIDATE_CALL: &str = "revalidatePath";

static MUTATION: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(insert|update|delete)\b"));

/// Requires `revalidatePath()` when a server action mutates data.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireCacheRevalidation;

impl RequireCacheRevalidation {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RequireCacheRevalidation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Server actions that mutate data must call revalidatePath()"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::File
    }

    fn applies_to(&self, categories: &FileCategories) -> bool {
        categories.contains(FileCategory::ServerAction)
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let has_mutation = ctx.lines().any(|(_, line)| MUTATION.is_match(line));
        let has_revalidate = ctx.lines().any(|(_, line)| line.contains(REVALIDATE_CALL));

        if !has_mutation || has_revalidate {
            return Vec::new();
        }

        vec![Violation::new(
            CODE,
            NAME,
            Location::whole_file(ctx.path),
            "Missing revalidatePath() after mutation.",
        )
        .with_suggestion(Suggestion::new(
            "Add revalidatePath('/path') after data changes to invalidate cache.",
        ))]
    }
}
