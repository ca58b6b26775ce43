//! Regex helpers shared by the built-in rules.

use regex::Regex;

/// Compiles a pattern literal.
///
/// Only called from `LazyLock` statics holding literals; every static is
/// forced by the owning rule's unit tests.
#[allow(clippy::expect_used)] // literal patterns, exercised by tests
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_literal() {
        assert!(compile(r"a\s+b").is_match("a   b"));
    }
}
