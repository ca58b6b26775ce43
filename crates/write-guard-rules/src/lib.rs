//! # write-guard-rules
//!
//! Built-in pattern rules for write-guard.
//!
//! ## Available Rules
//!
//! | Code | Name | Applies to | Description |
//! |------|------|------------|-------------|
//! | WG001 | `no-direct-client-query` | server actions | Forbids `supabase.from(` outside repositories |
//! | WG002 | `require-cache-revalidation` | server actions | Requires `revalidatePath()` when data is mutated |
//! | WG003 | `no-column-picking` | `*.repository.ts` | Requires `select('*')` |
//! | WG004 | `no-hardcoded-colors` | components | Forbids palette color classes |
//! | WG005 | `no-raw-html-elements` | components | Forbids raw `<button>`, `<input>`, `<textarea>`, `<select>` |
//! | WG006 | `protected-file` | every inspected file | Blocks generated and secret files |
//!
//! ## Usage
//!
//! ```ignore
//! use write_guard_core::Config;
//! use write_guard_rules::default_checker;
//!
//! let checker = default_checker(Config::default());
//! let result = checker.check("components/Card.tsx", "<button onClick={go}>");
//! assert!(!result.is_clean());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_column_picking;
mod no_direct_client_query;
mod no_hardcoded_colors;
mod no_raw_html_elements;
mod pattern;
mod protected_file;
mod require_cache_revalidation;
mod table;

pub use no_column_picking::NoColumnPicking;
pub use no_direct_client_query::NoDirectClientQuery;
pub use no_hardcoded_colors::NoHardcodedColors;
pub use no_raw_html_elements::NoRawHtmlElements;
pub use protected_file::ProtectedFile;
pub use require_cache_revalidation::RequireCacheRevalidation;
pub use table::{all_rules, default_checker};

/// Re-export core types for convenience.
pub use write_guard_core::{Checker, Config, Rule, Violation};
