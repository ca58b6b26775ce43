//! Configuration types for write-guard.
//!
//! Configuration is optional. Without it every compiled-in rule runs and the
//! block report ends with [`DEFAULT_DOCS_HINT`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Closing hint printed at the end of a block report.
pub const DEFAULT_DOCS_HINT: &str = "See .claude/skills/ for pattern documentation.";

/// Top-level configuration for write-guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Block report settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Per-rule configurations, keyed by rule name or code.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e: toml::de::Error| ConfigError::Parse {
            message: e.message().to_string(),
        })
    }

    /// Checks if a rule is enabled. Rules can be addressed by name or code.
    #[must_use]
    pub fn is_rule_enabled(&self, name: &str, code: &str) -> bool {
        [name, code]
            .iter()
            .filter_map(|key| self.rules.get(*key))
            .all(|c| c.enabled.unwrap_or(true))
    }

    /// Returns the closing hint line for block reports.
    #[must_use]
    pub fn docs_hint(&self) -> &str {
        self.report.docs_hint.as_deref().unwrap_or(DEFAULT_DOCS_HINT)
    }
}

/// Block report configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Replaces the closing documentation hint.
    #[serde(default)]
    pub docs_hint: Option<String>,
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert_eq!(config.docs_hint(), DEFAULT_DOCS_HINT);
        assert!(config.is_rule_enabled("no-column-picking", "WG003"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[report]
docs_hint = "See docs/patterns.md."

[rules.no-raw-html-elements]
enabled = false

[rules.WG003]
enabled = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.docs_hint(), "See docs/patterns.md.");
        assert!(!config.is_rule_enabled("no-raw-html-elements", "WG005"));
        assert!(config.is_rule_enabled("no-column-picking", "WG003"));
    }

    #[test]
    fn disabling_by_code() {
        let config = Config::parse("[rules.WG002]\nenabled = false\n").expect("parse");
        assert!(!config.is_rule_enabled("require-cache-revalidation", "WG002"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::parse("[rules.WG002]\nenabeld = false\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = Config::parse("preset = \"strict\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[report]\ndocs_hint = \"hint\"").expect("write");
        let config = Config::from_file(file.path()).expect("load");
        assert_eq!(config.docs_hint(), "hint");
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
