//! The persisted analysis report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::DocumentationAction;
use crate::summary::ChangeSetSummary;

/// Complete output of one analysis run, serialized to JSON for downstream
/// automation or human review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique id of this run.
    pub run_id: Uuid,

    /// Repository the change request belongs to, `owner/repo`.
    pub repository: String,

    /// Change-request (pull-request) number.
    pub change_request: u64,

    /// When the report was generated.
    pub generated_at: DateTime<Utc>,

    /// Aggregated change-set summary.
    pub summary: ChangeSetSummary,

    /// Ordered documentation action plan, highest priority first.
    pub actions: Vec<DocumentationAction>,
}

impl AnalysisReport {
    /// Assemble a report for a run, stamping it with a fresh id and the
    /// current time.
    pub fn new(
        repository: impl Into<String>,
        change_request: u64,
        summary: ChangeSetSummary,
        actions: Vec<DocumentationAction>,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            repository: repository.into(),
            change_request,
            generated_at: Utc::now(),
            summary,
            actions,
        }
    }
}
