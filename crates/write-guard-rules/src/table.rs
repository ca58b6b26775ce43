//! The built-in rule table.

use write_guard_core::{Checker, Config, RuleBox};

use crate::{
    NoColumnPicking, NoDirectClientQuery, NoHardcodedColors, NoRawHtmlElements, ProtectedFile,
    RequireCacheRevalidation,
};

/// Returns every built-in rule in evaluation order.
///
/// The order fixes the order of violations in a report: server-action
/// rules, repository rules, component rules, then protected files.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoDirectClientQuery::new()),
        Box::new(RequireCacheRevalidation::new()),
        Box::new(NoColumnPicking::new()),
        Box::new(NoHardcodedColors::new()),
        Box::new(NoRawHtmlElements::new()),
        Box::new(ProtectedFile::new()),
    ]
}

/// Builds a checker running the built-in table under `config`.
#[must_use]
pub fn default_checker(config: Config) -> Checker {
    Checker::builder().rules(all_rules()).config(config).build()
}
