//! File classification.
//!
//! Maps the target path of a proposed write to the set of categories it
//! belongs to. Rules select on categories and never look at the path
//! themselves, so "what kind of file is this" stays in one place.

use serde::{Deserialize, Serialize};

/// Extensions the checker inspects at all.
const LINTABLE_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".sql"];

/// A tag describing what kind of file a path denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    /// Path ends in one of the inspected extensions (`.ts`, `.tsx`, `.sql`).
    Lintable,
    /// Server action module: path contains `actions.ts` or `actions/`.
    ServerAction,
    /// Any path mentioning `repository`, case-insensitively.
    RepositoryPath,
    /// Repository module following the `*.repository.ts` convention.
    RepositoryModule,
    /// UI component markup: a `.tsx` file under a `components` folder.
    Component,
    /// Generated database type definitions (`database.types.ts`).
    GeneratedTypes,
    /// Secret configuration (`.env` files).
    SecretConfig,
    /// Generated dependency lock file (`package-lock.json`).
    LockFile,
}

impl FileCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Lintable,
        Self::ServerAction,
        Self::RepositoryPath,
        Self::RepositoryModule,
        Self::Component,
        Self::GeneratedTypes,
        Self::SecretConfig,
        Self::LockFile,
    ];

    /// Returns true if `path` belongs to this category.
    #[must_use]
    pub fn matches(self, path: &str) -> bool {
        match self {
            Self::Lintable => LINTABLE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)),
            Self::ServerAction => path.contains("actions.ts") || path.contains("actions/"),
            Self::RepositoryPath => path.to_lowercase().contains("repository"),
            Self::RepositoryModule => path.contains(".repository.ts"),
            Self::Component => path.ends_with(".tsx") && path.contains("components"),
            Self::GeneratedTypes => path.ends_with("database.types.ts"),
            Self::SecretConfig => path.contains(".env"),
            Self::LockFile => path.ends_with("package-lock.json"),
        }
    }

    /// Returns the kebab-case name of this category.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lintable => "lintable",
            Self::ServerAction => "server-action",
            Self::RepositoryPath => "repository-path",
            Self::RepositoryModule => "repository-module",
            Self::Component => "component",
            Self::GeneratedTypes => "generated-types",
            Self::SecretConfig => "secret-config",
            Self::LockFile => "lock-file",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The zero-or-more categories a path belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCategories(Vec<FileCategory>);

impl FileCategories {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the set contains `category`.
    #[must_use]
    pub fn contains(&self, category: FileCategory) -> bool {
        self.0.contains(&category)
    }

    /// Returns true if the path matched no category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = FileCategory> + '_ {
        self.0.iter().copied()
    }

    /// Adds a category, keeping declaration order and uniqueness.
    pub fn insert(&mut self, category: FileCategory) {
        if let Err(pos) = self.0.binary_search(&category) {
            self.0.insert(pos, category);
        }
    }
}

impl FromIterator<FileCategory> for FileCategories {
    fn from_iter<I: IntoIterator<Item = FileCategory>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl std::fmt::Display for FileCategories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(FileCategory::name).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// Classifies a target path.
#[must_use]
pub fn classify(path: &str) -> FileCategories {
    FileCategory::ALL
        .into_iter()
        .filter(|category| category.matches(path))
        .collect()
}
