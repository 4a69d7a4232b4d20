//! Command implementations: the analysis pipeline and report handling.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use docpilot_agent::{ContentDrafter, ModelConfig, OpenRouterClient};
use docpilot_core::{aggregate, AnalysisThresholds, Classifier, Planner, PlannerConfig};
use docpilot_coverage::{CoverageAnalyzer, CoverageConfig};
use docpilot_models::{AnalysisReport, CoverageResult};
use docpilot_sources::{ChangeSource, ConfluenceSource, GithubSource};

use crate::error::{CliError, Result};
use crate::print::render_report;

/// Options for the analyze command.
pub struct AnalyzeOptions {
    pub repo: String,
    pub pr: u64,
    pub space: String,
    pub max_topics: usize,
    pub lookup_timeout: Duration,
    pub offline: bool,
}

/// Run the full analysis pipeline and write the report.
///
/// The only aborting failure is the initial change-list fetch: with no
/// change records there is nothing to classify. Everything downstream
/// degrades instead of failing (empty change set, unavailable or failing
/// documentation source).
pub async fn analyze(options: &AnalyzeOptions, output: &Path) -> Result<AnalysisReport> {
    let github = GithubSource::from_env()?;

    info!(repo = %options.repo, pr = options.pr, "fetching changed files");
    let records = github.list_changed_files(&options.repo, options.pr).await?;
    if records.is_empty() {
        info!("no changes detected");
    }

    let classifier = Classifier::new(AnalysisThresholds::default());
    let descriptors = classifier.classify_all(&records);
    let summary = aggregate(&descriptors);

    let planner = Planner::new(PlannerConfig::new().with_space_key(options.space.as_str()));
    let topics = planner.candidate_topics(&descriptors);

    let coverage = if options.offline || topics.is_empty() {
        HashMap::new()
    } else {
        analyze_coverage(options, &topics).await
    };

    let actions = planner.plan(&summary, &coverage, &descriptors);
    let report = AnalysisReport::new(options.repo.clone(), options.pr, summary, actions);

    write_report(&report, output)?;
    info!(path = %output.display(), actions = report.actions.len(), "report written");

    println!("{}", render_report(&report));
    Ok(report)
}

/// Probe existing coverage; an unavailable documentation source degrades
/// to planning without coverage rather than failing the run.
async fn analyze_coverage(
    options: &AnalyzeOptions,
    topics: &[String],
) -> HashMap<String, CoverageResult> {
    let confluence = match ConfluenceSource::from_env() {
        Ok(source) => source,
        Err(e) => {
            warn!(error = %e, "documentation source unavailable, planning without coverage");
            return HashMap::new();
        }
    };

    let analyzer = CoverageAnalyzer::new(
        CoverageConfig::new()
            .with_max_topics(options.max_topics)
            .with_lookup_timeout(options.lookup_timeout),
    );
    analyzer.analyze(topics, &confluence).await
}

/// Print a previously saved report.
pub fn report(input: &Path) -> Result<()> {
    let report = read_report(input)?;
    println!("{}", render_report(&report));
    Ok(())
}

/// Draft page content for one action of a saved report.
///
/// `action` is the 1-based index shown by the report command.
pub async fn draft(input: &Path, action: usize, model: Option<String>) -> Result<()> {
    let report = read_report(input)?;
    let action = report
        .actions
        .get(action.wrapping_sub(1))
        .ok_or_else(|| {
            CliError::InvalidInput(format!(
                "action {} not in report ({} action(s))",
                action,
                report.actions.len()
            ))
        })?;

    let client = OpenRouterClient::from_env()?;
    let config = model.map(ModelConfig::new).unwrap_or_default();
    let confluence = ConfluenceSource::from_env()?;

    let drafter = ContentDrafter::new(client, config);
    let page = drafter.draft(action, &report.summary, &confluence).await?;

    println!("# {}\n\n{}", page.title, page.body);
    Ok(())
}

/// Serialize a report to pretty-printed JSON on disk.
pub fn write_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a report back from disk.
pub fn read_report(path: &Path) -> Result<AnalysisReport> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
