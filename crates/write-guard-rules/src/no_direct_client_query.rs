//! Rule to forbid direct database client queries in server actions.
//!
//! # Rationale
//!
//! Server actions should go through repository functions so that queries
//! live in one layer. A chained `supabase.from(` call inside an action means
//! the action talks to the database client directly.
//!
//! # Applies to
//!
//! Server action files (`actions.ts`, `actions/`), except paths that
//! themselves mention `repository`.

use std::sync::LazyLock;

use regex::Regex;
use write_guard_core::{
    FileCategories, FileCategory, FileContext, Location, Rule, Suggestion, Violation,
};

use crate::pattern::compile;

/// Rule code for no-direct-client-query.
pub const CODE: &str = "WG001";

/// Rule name for no-direct-client-query.
pub const NAME: &str = "no-direct-client-query";

static CLIENT_FROM: LazyLock<Regex> = LazyLock::new(|| compile(r"supabase\s*\.\s*from\s*\("));

/// Forbids `supabase.from(...)` in server actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDirectClientQuery;

impl NoDirectClientQuery {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoDirectClientQuery {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Server actions must query through repository functions"
    }

    fn applies_to(&self, categories: &FileCategories) -> bool {
        categories.contains(FileCategory::ServerAction)
            && !categories.contains(FileCategory::RepositoryPath)
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        ctx.lines()
            .filter(|(_, line)| CLIENT_FROM.is_match(line))
            .map(|(n, line)| {
                Violation::new(
                    CODE,
                    NAME,
                    Location::new(ctx.path, n),
                    "Direct Supabase query in server action. Use repository function instead.",
                )
                .with_found(line)
                .with_suggestion(Suggestion::new("Import from @/app/_shared/repositories/"))
            })
            .collect()
    }
}
