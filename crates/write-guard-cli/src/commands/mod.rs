//! Subcommand implementations.

pub mod check;
pub mod hook;
pub mod list_rules;
pub mod output;

use std::path::Path;

use write_guard_core::{Config, ConfigError};

/// Loads the configuration named on the command line, if any.
///
/// Without an explicit path the compiled-in defaults are used; no file is
/// searched for.
///
/// # Errors
///
/// Returns an error if the named file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => {
            tracing::debug!("Using config: {}", p.display());
            Config::from_file(p)
        }
        None => Ok(Config::default()),
    }
}
