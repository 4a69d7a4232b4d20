//! Action strategy planning.
//!
//! Consumes the aggregated summary, per-topic coverage results and the
//! descriptor sequence and emits the ordered documentation action plan.
//! Topics are categories with at least one significant change; ordering
//! is a stable sort by priority, so equally-urgent topics keep the order
//! they were first observed in the input.

use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::debug;

use docpilot_models::{
    ActionKind, ActionPriority, ChangeCategory, ChangeDescriptor, ChangeSetSummary,
    ContentStrategy, CoverageResult, DocumentationAction, ImpactLevel,
};

use crate::config::PlannerConfig;

/// Plans documentation actions from classified changes and coverage.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Topic keywords to probe for existing coverage, one per category
    /// with at least one significant change, in first-observed order.
    ///
    /// Callers run the coverage analyzer over these before calling
    /// [`Planner::plan`].
    pub fn candidate_topics(&self, descriptors: &[ChangeDescriptor]) -> Vec<String> {
        let mut topics = Vec::new();
        for (category, members) in group_by_category(descriptors) {
            if members.iter().any(|d| d.is_significant) {
                topics.push(category.as_str().to_string());
            }
        }
        topics
    }

    /// Produce the ordered action plan.
    ///
    /// Missing coverage entries (a lookup that was cancelled before it
    /// ran) are treated the same as "no coverage found". An empty or
    /// entirely insignificant descriptor sequence produces zero actions.
    pub fn plan(
        &self,
        summary: &ChangeSetSummary,
        coverage: &HashMap<String, CoverageResult>,
        descriptors: &[ChangeDescriptor],
    ) -> Vec<DocumentationAction> {
        let mut actions = Vec::new();

        for (category, members) in group_by_category(descriptors) {
            let significant = members.iter().filter(|d| d.is_significant).count();
            if significant == 0 {
                continue;
            }

            let topic = category.as_str();
            let covered = coverage.get(topic).map_or(false, CoverageResult::has_coverage);
            let breaking = members.iter().filter(|d| d.is_breaking).count();
            let migration = members.iter().any(|d| d.requires_migration);

            let strategy = if migration && breaking > 0 && !covered {
                ContentStrategy::Both
            } else if covered {
                ContentStrategy::ContextualUpdates
            } else {
                ContentStrategy::CompleteContent
            };

            let priority = topic_priority(&members, migration);
            let kind = action_kind(strategy, priority);

            debug!(
                topic = topic,
                ?strategy,
                ?priority,
                significant = significant,
                breaking = breaking,
                "planned documentation action"
            );

            actions.push(DocumentationAction {
                kind,
                space_key: self.config.space_key.clone(),
                title: title_for(category, strategy),
                priority,
                strategy,
                reason: reason_for(topic, &members, significant, breaking, coverage.get(topic)),
                audiences: audiences_for(category),
                breaking_changes: breaking > 0,
                migration_required: migration,
            });
        }

        // Stable: equal priorities keep first-observed topic order
        actions.sort_by_key(|a| Reverse(a.priority));

        if actions.is_empty() && summary.total_files > 0 {
            debug!(
                total_files = summary.total_files,
                "no significant changes, empty action plan"
            );
        }

        actions
    }
}

/// Group descriptors by category, preserving first-observed order.
fn group_by_category(
    descriptors: &[ChangeDescriptor],
) -> Vec<(ChangeCategory, Vec<&ChangeDescriptor>)> {
    let mut order: Vec<ChangeCategory> = Vec::new();
    let mut groups: HashMap<ChangeCategory, Vec<&ChangeDescriptor>> = HashMap::new();

    for d in descriptors {
        let members = groups.entry(d.category).or_default();
        if members.is_empty() {
            order.push(d.category);
        }
        members.push(d);
    }

    order
        .into_iter()
        .map(|c| {
            let members = groups.remove(&c).unwrap_or_default();
            (c, members)
        })
        .collect()
}

/// Worst-case priority across a topic's members, with the migration bump.
fn topic_priority(members: &[&ChangeDescriptor], migration: bool) -> ActionPriority {
    let base = if members.iter().any(|d| d.is_breaking && d.affects_api) {
        ActionPriority::Critical
    } else if members.iter().any(|d| d.impact == ImpactLevel::High) {
        ActionPriority::High
    } else if members.iter().all(|d| d.impact == ImpactLevel::Low) {
        ActionPriority::Low
    } else {
        ActionPriority::Medium
    };

    if migration {
        base.bumped()
    } else {
        base
    }
}

/// Kind follows strategy; low-urgency contextual work only asks for a
/// review of the existing page.
fn action_kind(strategy: ContentStrategy, priority: ActionPriority) -> ActionKind {
    match strategy {
        ContentStrategy::CompleteContent | ContentStrategy::Both => ActionKind::CreatePage,
        ContentStrategy::ContextualUpdates if priority == ActionPriority::Low => {
            ActionKind::ReviewPage
        }
        ContentStrategy::ContextualUpdates => ActionKind::UpdatePage,
    }
}

fn title_for(category: ChangeCategory, strategy: ContentStrategy) -> String {
    let base = match category {
        ChangeCategory::Api => "API Reference",
        ChangeCategory::Configuration => "Configuration Guide",
        ChangeCategory::Frontend => "User Interface Guide",
        ChangeCategory::Backend => "Backend Services",
        ChangeCategory::Test => "Testing Guide",
        ChangeCategory::Documentation => "Documentation Overview",
        ChangeCategory::Database => "Data Model",
        ChangeCategory::Infrastructure => "Deployment & Operations",
        ChangeCategory::Other => "Project Notes",
    };

    if strategy == ContentStrategy::Both {
        format!("{} Migration Guide", base)
    } else {
        base.to_string()
    }
}

fn audiences_for(category: ChangeCategory) -> Vec<String> {
    let tags: &[&str] = match category {
        ChangeCategory::Api => &["developers", "integrators"],
        ChangeCategory::Configuration => &["developers", "operators"],
        ChangeCategory::Frontend => &["end_users", "developers"],
        ChangeCategory::Backend | ChangeCategory::Test | ChangeCategory::Other => &["developers"],
        ChangeCategory::Documentation => &["developers", "technical_writers"],
        ChangeCategory::Database => &["developers", "operators"],
        ChangeCategory::Infrastructure => &["operators"],
    };
    tags.iter().map(|t| t.to_string()).collect()
}

fn reason_for(
    topic: &str,
    members: &[&ChangeDescriptor],
    significant: usize,
    breaking: usize,
    coverage: Option<&CoverageResult>,
) -> String {
    let coverage_note = match coverage {
        Some(c) if c.has_coverage() => {
            format!("{} existing page(s) cover this topic", c.matches.len())
        }
        _ => "no existing coverage found".to_string(),
    };

    let breaking_note = if breaking > 0 {
        format!(", {} breaking", breaking)
    } else {
        String::new()
    };

    format!(
        "{} significant {} change(s){} across {} file(s); {}",
        significant,
        topic,
        breaking_note,
        members.len(),
        coverage_note
    )
}
