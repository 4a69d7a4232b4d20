//! Raw change records and the descriptors derived from them.

use serde::{Deserialize, Serialize};

/// Status of a changed file, as reported by the code-review host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ChangeStatus {
    /// File was added.
    Added,
    /// File content was modified.
    Modified,
    /// File was deleted.
    Deleted,
    /// File was renamed.
    Renamed,
}

impl Default for ChangeStatus {
    fn default() -> Self {
        Self::Modified
    }
}

impl From<String> for ChangeStatus {
    /// GitHub reports deletions as `removed`; anything unrecognized is
    /// treated as a modification rather than rejecting the record.
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "added" => Self::Added,
            "removed" | "deleted" => Self::Deleted,
            "renamed" => Self::Renamed,
            _ => Self::Modified,
        }
    }
}

/// One file's diff metadata from a code-review request.
///
/// This is the raw input to the classifier, deserialized straight from the
/// pull-request files payload. Missing fields fall back to defaults so a
/// sparse record never fails classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Path of the changed file.
    #[serde(default)]
    pub filename: String,

    /// Change status (added/modified/deleted/renamed).
    #[serde(default)]
    pub status: ChangeStatus,

    /// Lines added.
    #[serde(default)]
    pub additions: u32,

    /// Lines deleted.
    #[serde(default)]
    pub deletions: u32,
}

impl ChangeRecord {
    /// Create a record with the given path and line counts, status
    /// defaulting to modified.
    pub fn new(filename: impl Into<String>, additions: u32, deletions: u32) -> Self {
        Self {
            filename: filename.into(),
            status: ChangeStatus::Modified,
            additions,
            deletions,
        }
    }
}

/// Category assigned to a changed file by path keyword matching.
///
/// The variant order here is also the match priority order used by the
/// classifier: a path matching both `api` and `test` keywords classifies
/// as `Api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCategory {
    Api,
    Configuration,
    Frontend,
    Backend,
    Test,
    Documentation,
    Database,
    Infrastructure,
    Other,
}

impl ChangeCategory {
    /// Stable lowercase label, used as a topic key and in narratives.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Configuration => "configuration",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Test => "test",
            Self::Documentation => "documentation",
            Self::Database => "database",
            Self::Infrastructure => "infrastructure",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Impact level of a single change.
///
/// Ordered so that `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

/// Structured descriptor derived from one [`ChangeRecord`].
///
/// Every derived field is a pure function of the record and the configured
/// thresholds; classifying the same record twice yields identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeDescriptor {
    /// Path of the changed file.
    pub filename: String,

    /// Change status, copied from the record.
    pub change_type: ChangeStatus,

    /// Category assigned by keyword matching.
    pub category: ChangeCategory,

    /// Lines added, carried over for downstream significance checks.
    pub additions: u32,

    /// Lines deleted, carried over for downstream significance checks.
    pub deletions: u32,

    /// Whether this change looks breaking (contract-sensitive path plus a
    /// large enough diff).
    pub is_breaking: bool,

    /// Assessed impact level.
    pub impact: ImpactLevel,

    /// Whether the change touches an API surface.
    pub affects_api: bool,

    /// Whether the change touches user-facing frontend code.
    pub affects_ui: bool,

    /// Whether consumers will need a migration to absorb this change.
    pub requires_migration: bool,

    /// Whether the diff is large enough to count toward documentation
    /// planning.
    pub is_significant: bool,
}
