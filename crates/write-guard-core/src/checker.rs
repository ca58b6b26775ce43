//! The rule checker: runs the rule table against one proposed write.

use crate::category::FileCategory;
use crate::config::Config;
use crate::context::FileContext;
use crate::rule::{Rule, RuleBox};
use crate::types::LintResult;

use tracing::debug;

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl CheckerBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule to the table.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends several boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the checker, dropping rules the configuration disables.
    #[must_use]
    pub fn build(self) -> Checker {
        let config = self.config.unwrap_or_default();
        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.name(), rule.code());
                if !enabled {
                    debug!(rule = rule.name(), code = rule.code(), "rule disabled by config");
                }
                enabled
            })
            .collect();

        Checker { rules, config }
    }
}

/// Runs an ordered rule table against proposed writes.
///
/// Use [`Checker::builder()`] to construct an instance.
pub struct Checker {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the active rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Returns the configuration this checker was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checks `content` as the new content of `path`.
    ///
    /// Paths outside the inspected extensions yield an empty result without
    /// running any rule. Otherwise every applicable rule runs in table order
    /// and all violations are kept, in order, without deduplication.
    #[must_use]
    pub fn check(&self, path: &str, content: &str) -> LintResult {
        let ctx = FileContext::new(path, content);
        self.check_context(&ctx)
    }

    /// Checks an already classified context.
    #[must_use]
    pub fn check_context(&self, ctx: &FileContext) -> LintResult {
        let mut result = LintResult::new(ctx.path);

        if !ctx.is(FileCategory::Lintable) {
            debug!(path = ctx.path, "not an inspected file type, skipping");
            return result;
        }

        debug!(path = ctx.path, categories = %ctx.categories, "checking");

        for rule in &self.rules {
            if !rule.applies_to(&ctx.categories) {
                continue;
            }
            let violations = rule.check(ctx);
            debug!(rule = rule.name(), count = violations.len(), "rule evaluated");
            result.violations.extend(violations);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::FileCategories;
    use crate::types::{Location, Violation};

    struct FlagEveryLine(&'static str, &'static str, FileCategory);

    impl Rule for FlagEveryLine {
        fn name(&self) -> &'static str {
            self.0
        }
        fn code(&self) -> &'static str {
            self.1
        }
        fn applies_to(&self, categories: &FileCategories) -> bool {
            categories.contains(self.2)
        }
        fn check(&self, ctx: &FileContext) -> Vec<Violation> {
            ctx.lines()
                .map(|(n, line)| {
                    Violation::new(self.code(), self.name(), Location::new(ctx.path, n), "flag")
                        .with_found(line)
                })
                .collect()
        }
    }

    fn checker() -> Checker {
        Checker::builder()
            .rule(FlagEveryLine("first", "T001", FileCategory::Lintable))
            .rule(FlagEveryLine("second", "T002", FileCategory::Component))
            .build()
    }

    #[test]
    fn skips_uninspected_extensions() {
        let result = checker().check("notes.md", "a\nb");
        assert!(result.is_clean());
    }

    #[test]
    fn orders_by_rule_then_line() {
        let result = checker().check("components/Card.tsx", "a\nb");
        let order: Vec<(&str, usize)> = result
            .violations
            .iter()
            .map(|v| (v.code.as_str(), v.location.line))
            .collect();
        assert_eq!(
            order,
            vec![("T001", 1), ("T001", 2), ("T002", 1), ("T002", 2)]
        );
    }

    #[test]
    fn skips_inapplicable_rules() {
        let result = checker().check("lib/util.ts", "a");
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].code, "T001");
    }

    #[test]
    fn config_disables_rules() {
        let config = Config::parse("[rules.second]\nenabled = false\n").expect("parse");
        let checker = Checker::builder()
            .rule(FlagEveryLine("first", "T001", FileCategory::Lintable))
            .rule(FlagEveryLine("second", "T002", FileCategory::Component))
            .config(config)
            .build();
        assert_eq!(checker.rule_count(), 1);
        let names: Vec<&str> = checker.rules().map(Rule::name).collect();
        assert_eq!(names, vec!["first"]);
    }

    #[test]
    fn repeated_checks_are_identical() {
        let checker = checker();
        let a = checker.check("components/Card.tsx", "x\ny\nz");
        let b = checker.check("components/Card.tsx", "x\ny\nz");
        assert_eq!(a, b);
    }
}
