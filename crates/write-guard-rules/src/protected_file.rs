//! Rule to block edits of protected files.
//!
//! Generated files are rebuilt by tooling and secrets never go through the
//! editing agent. Evaluated for every inspected path, independent of the
//! other rule groups.

use write_guard_core::{
    FileCategories, FileCategory, FileContext, Location, Rule, RuleScope, Suggestion, Violation,
};

/// Rule code for protected-file.
pub const CODE: &str = "WG006";

/// Rule name for protected-file.
pub const NAME: &str = "protected-file";

/// Protected categories, the reason, and what to do instead.
const PROTECTED: &[(FileCategory, &str, &str)] = &[
    (
        FileCategory::GeneratedTypes,
        "database.types.ts is auto-generated.",
        "Run 'npm run db:types' instead.",
    ),
    (
        FileCategory::SecretConfig,
        ".env files contain secrets.",
        "Don't edit directly.",
    ),
    (
        FileCategory::LockFile,
        "package-lock.json is auto-generated.",
        "Run npm install instead.",
    ),
];

/// Blocks writes to generated and secret files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtectedFile;

impl ProtectedFile {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ProtectedFile {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Generated and secret files must not be edited directly"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::File
    }

    fn applies_to(&self, categories: &FileCategories) -> bool {
        PROTECTED.iter().any(|(category, _, _)| categories.contains(*category))
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        PROTECTED
            .iter()
            .filter(|(category, _, _)| ctx.is(*category))
            .map(|(_, reason, fix)| {
                Violation::new(
                    CODE,
                    NAME,
                    Location::whole_file(ctx.path),
                    format!("Protected file: {reason}"),
                )
                .with_suggestion(Suggestion::new(*fix))
            })
            .collect()
    }
}
