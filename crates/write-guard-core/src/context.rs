//! Context types for rule execution.

use crate::category::{classify, FileCategories, FileCategory};

/// Context provided to rules.
///
/// Holds the proposed write and the categories its path was classified into.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Target path exactly as supplied by the editing tool.
    pub path: &'a str,
    /// Proposed new content.
    pub content: &'a str,
    /// Categories the path belongs to.
    pub categories: FileCategories,
}

impl<'a> FileContext<'a> {
    /// Creates a context, classifying `path`.
    #[must_use]
    pub fn new(path: &'a str, content: &'a str) -> Self {
        Self {
            path,
            content,
            categories: classify(path),
        }
    }

    /// Creates a context with explicit categories, bypassing classification.
    #[must_use]
    pub fn with_categories(path: &'a str, content: &'a str, categories: FileCategories) -> Self {
        Self {
            path,
            content,
            categories,
        }
    }

    /// Shorthand for `self.categories.contains(category)`.
    #[must_use]
    pub fn is(&self, category: FileCategory) -> bool {
        self.categories.contains(category)
    }

    /// Iterates over `(line_number, line)` pairs.
    ///
    /// Lines are split on `\n` only and numbered from 1, so a trailing
    /// newline yields a final empty line and `\r` stays part of the line.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> {
        self.content
            .split('\n')
            .enumerate()
            .map(|(i, line)| (i + 1, line))
    }
}
