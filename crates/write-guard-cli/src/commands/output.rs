//! Output formatting for the check command.

use std::io::Write;

use anyhow::{Context, Result};
use write_guard_core::LintResult;

use crate::report::block_report;
use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print<W: Write>(
    out: &mut W,
    result: &LintResult,
    format: OutputFormat,
    docs_hint: &str,
) -> Result<()> {
    let written = match format {
        OutputFormat::Text => print_text(out, result, docs_hint),
        OutputFormat::Json => print_json(out, result),
        OutputFormat::Compact => print_compact(out, result),
    };
    written
        .and_then(|()| out.flush())
        .context("failed to write check results")
}

fn print_text<W: Write>(out: &mut W, result: &LintResult, docs_hint: &str) -> std::io::Result<()> {
    if result.is_clean() {
        return writeln!(out, "No pattern violations in {}", result.path.display());
    }
    write!(out, "{}", block_report(result, docs_hint))
}

fn print_json<W: Write>(out: &mut W, result: &LintResult) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}

fn print_compact<W: Write>(out: &mut W, result: &LintResult) -> std::io::Result<()> {
    for violation in &result.violations {
        writeln!(out, "{violation}")?;
    }
    Ok(())
}
