//! Hook command: the gate wired to the process streams.

use std::io;
use std::path::Path;

use anyhow::Context;
use write_guard_rules::default_checker;

use super::load_config;
use crate::gate::{self, Verdict};

/// Runs the gate on stdin, reporting to stdout and stderr.
pub fn run(config_path: Option<&Path>) -> Verdict {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    gate::run(
        stdin,
        || {
            let config = load_config(config_path).context("failed to load configuration")?;
            Ok(default_checker(config))
        },
        &mut stdout,
        &mut stderr,
    )
}
