//! List rules command implementation.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use write_guard_core::Config;
use write_guard_rules::all_rules;

use super::load_config;

/// Runs the list-rules command.
pub fn run<W: Write>(config_path: Option<&Path>, out: &mut W) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    write_table(&config, out)
        .and_then(|()| out.flush())
        .context("failed to write rule table")
}

fn write_table<W: Write>(config: &Config, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Available rules:\n")?;
    writeln!(
        out,
        "{:<8} {:<28} {:<6} {:<9} Description",
        "Code", "Name", "Scope", "Status"
    )?;
    writeln!(out, "{}", "-".repeat(96))?;

    for rule in all_rules() {
        let status = if config.is_rule_enabled(rule.name(), rule.code()) {
            "enabled"
        } else {
            "disabled"
        };
        writeln!(
            out,
            "{:<8} {:<28} {:<6} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.scope(),
            status,
            rule.description()
        )?;
    }

    writeln!(out, "\nOnly .ts, .tsx and .sql files are inspected.")?;
    writeln!(out, "Disable a rule by name or code in the config file, e.g.:")?;
    writeln!(out, "  [rules.no-raw-html-elements]")?;
    writeln!(out, "  enabled = false")
}
