//! Change-set aggregation.
//!
//! Folds an ordered sequence of [`ChangeDescriptor`]s into a
//! [`ChangeSetSummary`]. Count fields are order-independent; the file
//! lists preserve input order so downstream display is reproducible.

use docpilot_models::{
    ChangeCategory, ChangeDescriptor, ChangeSetSummary, ChangeStatus, StrategyHint,
};

/// Aggregate descriptors into a change-set summary.
///
/// An empty sequence is not an error: it yields a zeroed summary with a
/// "no changes detected" narrative and the standard-update hint.
pub fn aggregate(descriptors: &[ChangeDescriptor]) -> ChangeSetSummary {
    let mut summary = ChangeSetSummary {
        total_files: descriptors.len(),
        ..Default::default()
    };

    for d in descriptors {
        match d.change_type {
            ChangeStatus::Added => summary.files_added += 1,
            ChangeStatus::Modified => summary.files_modified += 1,
            ChangeStatus::Deleted => summary.files_deleted += 1,
            ChangeStatus::Renamed => summary.files_renamed += 1,
        }
        summary.total_additions += u64::from(d.additions);
        summary.total_deletions += u64::from(d.deletions);

        *summary.by_category.entry(d.category).or_insert(0) += 1;
        *summary.by_impact.entry(d.impact).or_insert(0) += 1;

        if d.is_breaking {
            summary.breaking_files.push(d.filename.clone());
        }
        if d.affects_api {
            summary.api_files.push(d.filename.clone());
        }
        if d.category == ChangeCategory::Configuration {
            summary.config_files.push(d.filename.clone());
        }
        if d.is_significant {
            summary.significant_files.push(d.filename.clone());
        }
    }

    summary.strategy_hint = strategy_hint(&summary);
    summary.narrative = narrative(&summary);
    summary
}

/// Fixed decision order: breaking/API presence wins, then high-impact
/// volume, then the default.
fn strategy_hint(summary: &ChangeSetSummary) -> StrategyHint {
    if summary.has_api_changes() || summary.has_breaking() {
        StrategyHint::MigrationAndApiDocs
    } else if summary.high_impact_count() >= 3 {
        StrategyHint::ComprehensiveGuide
    } else {
        StrategyHint::StandardUpdate
    }
}

/// One-line narrative: high-impact count, up to three leading categories,
/// breaking count.
fn narrative(summary: &ChangeSetSummary) -> String {
    if summary.total_files == 0 {
        return "no changes detected".to_string();
    }

    let mut counts: Vec<(ChangeCategory, usize)> = summary
        .by_category
        .iter()
        .map(|(c, n)| (*c, *n))
        .collect();
    // BTreeMap iteration is already in category priority order, so equal
    // counts tie-break deterministically.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let leading: Vec<&str> = counts.iter().take(3).map(|(c, _)| c.as_str()).collect();

    format!(
        "{} file(s) changed, {} high-impact; leading areas: {}; {} breaking change(s)",
        summary.total_files,
        summary.high_impact_count(),
        leading.join(", "),
        summary.breaking_files.len()
    )
}
