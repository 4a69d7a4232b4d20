//! Change-set level summary produced by the aggregator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::change::{ChangeCategory, ImpactLevel};

/// Strategy hint for the documentation effort as a whole.
///
/// Chosen by a fixed decision order: breaking/API changes win over volume,
/// volume wins over the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyHint {
    /// API or breaking changes present: plan a migration guide plus API
    /// documentation updates.
    MigrationAndApiDocs,
    /// Several high-impact files: a new comprehensive guide is warranted.
    ComprehensiveGuide,
    /// Routine change set: standard documentation update.
    StandardUpdate,
}

impl StrategyHint {
    /// Human-readable phrasing for reports.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::MigrationAndApiDocs => "migration guide + API documentation update",
            Self::ComprehensiveGuide => "new comprehensive guide",
            Self::StandardUpdate => "standard update",
        }
    }
}

impl Default for StrategyHint {
    fn default() -> Self {
        Self::StandardUpdate
    }
}

/// Aggregated statistics and narrative for one analysis run.
///
/// Count fields are order-insensitive; the file lists preserve the input
/// order of the descriptor sequence for reproducible downstream display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeSetSummary {
    /// Total number of changed files.
    pub total_files: usize,

    /// Files with added status.
    pub files_added: usize,

    /// Files with modified status.
    pub files_modified: usize,

    /// Files with deleted status.
    pub files_deleted: usize,

    /// Files with renamed status.
    pub files_renamed: usize,

    /// Lines added across the whole change set.
    pub total_additions: u64,

    /// Lines deleted across the whole change set.
    pub total_deletions: u64,

    /// File counts per category.
    pub by_category: BTreeMap<ChangeCategory, usize>,

    /// File counts per impact level.
    pub by_impact: BTreeMap<ImpactLevel, usize>,

    /// Files assessed as breaking, in input order.
    pub breaking_files: Vec<String>,

    /// Files touching API surfaces, in input order.
    pub api_files: Vec<String>,

    /// Files touching configuration, in input order.
    pub config_files: Vec<String>,

    /// Files with a significant diff, in input order.
    pub significant_files: Vec<String>,

    /// One-line narrative of the change set.
    pub narrative: String,

    /// Overall documentation strategy hint.
    pub strategy_hint: StrategyHint,
}

impl ChangeSetSummary {
    /// Whether any file in the set was assessed as breaking.
    pub fn has_breaking(&self) -> bool {
        !self.breaking_files.is_empty()
    }

    /// Whether any file in the set touches an API surface.
    pub fn has_api_changes(&self) -> bool {
        !self.api_files.is_empty()
    }

    /// Number of high-impact files.
    pub fn high_impact_count(&self) -> usize {
        self.by_impact.get(&ImpactLevel::High).copied().unwrap_or(0)
    }
}
