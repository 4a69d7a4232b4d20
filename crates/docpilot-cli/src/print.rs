//! Human-readable report rendering.

use std::fmt::Write;

use docpilot_models::AnalysisReport;

/// Files listed per section before truncating.
const MAX_LISTED_FILES: usize = 10;

/// Render a report for terminal display.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let _ = writeln!(
        out,
        "Documentation analysis for {}#{}",
        report.repository, report.change_request
    );
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "{}", summary.narrative);
    let _ = writeln!(
        out,
        "files: {} ({} added, {} modified, {} deleted, {} renamed), lines: +{}/-{}",
        summary.total_files,
        summary.files_added,
        summary.files_modified,
        summary.files_deleted,
        summary.files_renamed,
        summary.total_additions,
        summary.total_deletions
    );
    let _ = writeln!(out, "strategy hint: {}", summary.strategy_hint.describe());

    file_section(&mut out, "significant files", &summary.significant_files);
    file_section(&mut out, "breaking files", &summary.breaking_files);
    file_section(&mut out, "api files", &summary.api_files);

    let _ = writeln!(out);
    if report.actions.is_empty() {
        let _ = writeln!(out, "No documentation actions needed.");
    } else {
        let _ = writeln!(out, "Planned actions ({}):", report.actions.len());
        for (i, action) in report.actions.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>3}. [{:?}] {:?} \"{}\" (space {}, strategy {:?})",
                i + 1,
                action.priority,
                action.kind,
                action.title,
                action.space_key,
                action.strategy
            );
            let _ = writeln!(out, "     {}", action.reason);
            let _ = writeln!(out, "     audiences: {}", action.audiences.join(", "));
            if action.migration_required {
                let _ = writeln!(out, "     migration required");
            }
        }
    }

    out
}

fn file_section(out: &mut String, label: &str, files: &[String]) {
    if files.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}:", label);
    for file in files.iter().take(MAX_LISTED_FILES) {
        let _ = writeln!(out, "  - {}", file);
    }
    if files.len() > MAX_LISTED_FILES {
        let _ = writeln!(out, "  ... and {} more", files.len() - MAX_LISTED_FILES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpilot_models::{
        ActionKind, ActionPriority, ChangeSetSummary, ContentStrategy, DocumentationAction,
    };

    fn sample_report() -> AnalysisReport {
        let mut summary = ChangeSetSummary::default();
        summary.total_files = 2;
        summary.narrative = "2 file(s) changed, 1 high-impact".to_string();
        summary.significant_files = vec!["auth/api/login_controller.py".to_string()];

        AnalysisReport::new(
            "acme/widgets",
            42,
            summary,
            vec![DocumentationAction {
                kind: ActionKind::CreatePage,
                space_key: "DOC".to_string(),
                title: "API Reference".to_string(),
                priority: ActionPriority::Critical,
                strategy: ContentStrategy::CompleteContent,
                reason: "1 significant api change(s)".to_string(),
                audiences: vec!["developers".to_string()],
                breaking_changes: true,
                migration_required: false,
            }],
        )
    }

    #[test]
    fn test_render_contains_sections() {
        let rendered = render_report(&sample_report());

        assert!(rendered.contains("acme/widgets#42"));
        assert!(rendered.contains("significant files:"));
        assert!(rendered.contains("auth/api/login_controller.py"));
        assert!(rendered.contains("Planned actions (1):"));
        assert!(rendered.contains("API Reference"));
    }

    #[test]
    fn test_render_empty_plan() {
        let report = AnalysisReport::new("acme/widgets", 1, ChangeSetSummary::default(), vec![]);
        let rendered = render_report(&report);

        assert!(rendered.contains("No documentation actions needed."));
    }

    #[test]
    fn test_long_file_lists_truncated() {
        let mut summary = ChangeSetSummary::default();
        summary.significant_files = (0..15).map(|i| format!("src/file{}.rs", i)).collect();
        let report = AnalysisReport::new("acme/widgets", 1, summary, vec![]);

        let rendered = render_report(&report);
        assert!(rendered.contains("... and 5 more"));
    }
}
