//! Existing-documentation coverage results, one per topic.

use serde::{Deserialize, Serialize};

/// Reference to a page in the knowledge base, as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    /// Page identifier in the knowledge base.
    pub id: String,

    /// Page title.
    pub title: String,

    /// Key of the space containing the page, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_key: Option<String>,
}

impl PageRef {
    /// Create a page reference without space information.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            space_key: None,
        }
    }
}

/// How closely an existing page matches a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    /// Topic appears in the page body or metadata only.
    Medium,
    /// Topic appears in the page title.
    High,
}

/// A scored match between a topic and an existing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMatch {
    /// Page identifier.
    pub id: String,

    /// Page title.
    pub title: String,

    /// Relevance of the match.
    pub relevance: Relevance,
}

/// Recommended content approach for a topic, based on coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedApproach {
    /// Coverage exists: contextual updates first, new supporting pages as
    /// a secondary measure.
    ContextualFirst,
    /// No coverage: complete new pages first, minimal edits to loosely
    /// related pages as a secondary measure.
    CreateFirst,
}

impl RecommendedApproach {
    /// The primary strategy this approach recommends.
    pub fn primary(&self) -> &'static str {
        match self {
            Self::ContextualFirst => "contextual_updates",
            Self::CreateFirst => "complete_new_pages",
        }
    }

    /// The secondary strategy this approach recommends.
    pub fn secondary(&self) -> &'static str {
        match self {
            Self::ContextualFirst => "new_supporting_pages",
            Self::CreateFirst => "minimal_existing_updates",
        }
    }
}

/// Coverage assessment for one documentation topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageResult {
    /// The topic keyword this result describes.
    pub topic: String,

    /// Matching existing pages, deduplicated by id.
    pub matches: Vec<PageMatch>,

    /// Recommended approach given the matches.
    pub approach: RecommendedApproach,
}

impl CoverageResult {
    /// Result for a topic with no existing coverage (also used when a
    /// lookup failed or timed out).
    pub fn no_coverage(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            matches: Vec::new(),
            approach: RecommendedApproach::CreateFirst,
        }
    }

    /// Whether any existing page covers this topic.
    pub fn has_coverage(&self) -> bool {
        !self.matches.is_empty()
    }
}
