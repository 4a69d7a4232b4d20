//! The final documentation action plan.

use serde::{Deserialize, Serialize};

/// Kind of documentation action.
///
/// `ArchivePage` is part of the downstream vocabulary (a reviewer or agent
/// may archive superseded pages) but the planner itself never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    CreatePage,
    UpdatePage,
    ReviewPage,
    ArchivePage,
}

/// Priority of a documentation action.
///
/// Ordered so that `Low < Medium < High < Critical`; action lists are
/// sorted highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl ActionPriority {
    /// One level up, capped at critical.
    pub fn bumped(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High | Self::Critical => Self::Critical,
        }
    }
}

/// Content strategy for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStrategy {
    /// Generate complete net-new content.
    CompleteContent,
    /// Insert targeted edits into existing content.
    ContextualUpdates,
    /// Create new content and flag related existing pages for review.
    Both,
}

/// One planned documentation action.
///
/// This is the contract consumed by the content-generation layer (or a
/// human reviewer): it states what must be produced, not how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationAction {
    /// What to do.
    pub kind: ActionKind,

    /// Target space in the knowledge base.
    pub space_key: String,

    /// Title of the page to create or update.
    pub title: String,

    /// Action priority.
    pub priority: ActionPriority,

    /// Chosen content strategy.
    pub strategy: ContentStrategy,

    /// Why this documentation work is needed.
    pub reason: String,

    /// Audience tags affected by the underlying changes.
    pub audiences: Vec<String>,

    /// Whether the underlying changes include breaking ones.
    pub breaking_changes: bool,

    /// Whether consumers will need a migration.
    pub migration_required: bool,
}
