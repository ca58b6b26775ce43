//! # write-guard-core
//!
//! Core framework for pre-write content linting.
//!
//! An editing tool hands over a proposed write (target path and new content).
//! This crate classifies the path, runs an ordered table of pattern rules
//! against the content and returns the violations found. It includes:
//!
//! - [`classify`] and [`FileCategory`] for path classification
//! - [`Rule`] trait for pattern rules
//! - [`Checker`] for running a rule table
//! - [`Violation`] for representing findings
//! - [`Config`] for optional TOML configuration
//!
//! ## Example
//!
//! ```ignore
//! use write_guard_core::Checker;
//!
//! let checker = Checker::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let result = checker.check("app/actions/user.actions.ts", &content);
//! for line in result.descriptions() {
//!     println!("{line}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod checker;
mod config;
mod context;
mod rule;
mod types;

pub use category::{classify, FileCategories, FileCategory};
pub use checker::{Checker, CheckerBuilder};
pub use config::{Config, ConfigError, ReportConfig, RuleConfig, DEFAULT_DOCS_HINT};
pub use context::FileContext;
pub use rule::{Rule, RuleBox, RuleScope};
pub use types::{LintResult, Location, Suggestion, Violation};
