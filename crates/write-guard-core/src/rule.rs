//! Rule trait for defining pattern rules.

use crate::category::FileCategories;
use crate::context::FileContext;
use crate::types::Violation;

/// What a rule inspects when it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Each line is matched on its own; one violation per offending line.
    Line,
    /// The content or path is judged as a whole; at most a few violations.
    File,
}

impl std::fmt::Display for RuleScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Line => "line",
            Self::File => "file",
        })
    }
}

/// A pattern rule evaluated against a proposed write.
///
/// A rule is a record of identity (`code`, `name`), an applicability
/// predicate over the file's categories, and a matcher that produces
/// violations. The [`Checker`](crate::Checker) only calls [`Rule::check`]
/// when [`Rule::applies_to`] returned true.
///
/// # Example
///
/// ```ignore
/// use write_guard_core::{FileCategories, FileCategory, FileContext, Location, Rule, Violation};
///
/// pub struct NoConsoleLog;
///
/// impl Rule for NoConsoleLog {
///     fn name(&self) -> &'static str { "no-console-log" }
///     fn code(&self) -> &'static str { "WG100" }
///
///     fn applies_to(&self, categories: &FileCategories) -> bool {
///         categories.contains(FileCategory::Component)
///     }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Violation> {
///         ctx.lines()
///             .filter(|(_, line)| line.contains("console.log("))
///             .map(|(n, line)| {
///                 Violation::new(self.code(), self.name(), Location::new(ctx.path, n), "console.log left in")
///                     .with_found(line)
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-column-picking").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "WG003").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns whether this rule matches lines or whole files.
    fn scope(&self) -> RuleScope {
        RuleScope::Line
    }

    /// Returns true if this rule should run for a file with these categories.
    fn applies_to(&self, categories: &FileCategories) -> bool;

    /// Checks the proposed content and returns any violations found.
    ///
    /// Must be deterministic and free of side effects.
    fn check(&self, ctx: &FileContext) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::FileCategory;
    use crate::types::Location;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn applies_to(&self, categories: &FileCategories) -> bool {
            categories.contains(FileCategory::Lintable)
        }
        fn check(&self, ctx: &FileContext) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                Location::new(ctx.path, 1),
                "Test violation",
            )]
        }
    }

    #[test]
    fn test_rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.scope(), RuleScope::Line);
    }

    #[test]
    fn test_applies_to() {
        let rule = TestRule;
        assert!(rule.applies_to(&FileContext::new("a.ts", "").categories));
        assert!(!rule.applies_to(&FileContext::new("a.md", "").categories));
    }
}
