//! Check command: lint a file on disk as if it were a proposed write.

use anyhow::{Context, Result};
use std::path::Path;
use write_guard_rules::default_checker;

use super::load_config;
use crate::gate::Verdict;
use crate::OutputFormat;

/// Runs the check command.
///
/// `as_path` overrides the path used for classification, so a scratch file
/// can be checked as e.g. `components/Card.tsx`.
pub fn run(
    file: &Path,
    as_path: Option<&str>,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<Verdict> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let checker = default_checker(config);

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let display_path = file.to_string_lossy();
    let path = as_path.unwrap_or(display_path.as_ref());

    tracing::info!("Checking {} with {} rules", path, checker.rule_count());

    let result = checker.check(path, &content);

    super::output::print(
        &mut std::io::stdout().lock(),
        &result,
        format,
        checker.config().docs_hint(),
    )?;

    if result.is_clean() {
        Ok(Verdict::Allow)
    } else {
        Ok(Verdict::Block)
    }
}
