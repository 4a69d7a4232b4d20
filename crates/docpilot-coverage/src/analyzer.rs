//! The coverage analyzer.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tokio::sync::watch;
use tokio::time::timeout;
use tracing::{debug, warn};

use docpilot_models::{CoverageResult, PageMatch, PageRef, RecommendedApproach, Relevance};

use crate::lookup::PageLookup;

/// Configuration for coverage analysis.
#[derive(Debug, Clone)]
pub struct CoverageConfig {
    /// Maximum number of topics queried per run; topics beyond this
    /// bounded prefix are skipped to bound external call volume.
    pub max_topics: usize,
    /// Timeout applied to each individual lookup call.
    pub lookup_timeout: Duration,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            max_topics: 3,
            lookup_timeout: Duration::from_secs(10),
        }
    }
}

impl CoverageConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the topic cap.
    pub fn with_max_topics(mut self, max: usize) -> Self {
        self.max_topics = max;
        self
    }

    /// Sets the per-lookup timeout.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }
}

/// Analyzes existing documentation coverage for a set of topics.
#[derive(Debug, Clone, Default)]
pub struct CoverageAnalyzer {
    config: CoverageConfig,
}

impl CoverageAnalyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: CoverageConfig) -> Self {
        Self { config }
    }

    /// Analyze coverage for the given topics.
    ///
    /// Equivalent to [`CoverageAnalyzer::analyze_with_shutdown`] with a
    /// signal that never fires.
    pub async fn analyze(
        &self,
        topics: &[String],
        lookup: &dyn PageLookup,
    ) -> HashMap<String, CoverageResult> {
        let (_tx, rx) = watch::channel(false);
        self.analyze_with_shutdown(topics, lookup, rx).await
    }

    /// Analyze coverage, stopping early when the shutdown signal flips.
    ///
    /// Lookups for the first `max_topics` topics run concurrently, each
    /// bounded by `lookup_timeout`. On shutdown no further lookups are
    /// issued and the results computed so far are returned as-is; topics
    /// missing from the returned map are treated downstream as having no
    /// coverage.
    pub async fn analyze_with_shutdown(
        &self,
        topics: &[String],
        lookup: &dyn PageLookup,
        mut shutdown: watch::Receiver<bool>,
    ) -> HashMap<String, CoverageResult> {
        let capped = &topics[..topics.len().min(self.config.max_topics)];
        if capped.len() < topics.len() {
            debug!(
                queried = capped.len(),
                skipped = topics.len() - capped.len(),
                "topic cap applied"
            );
        }

        let mut results = HashMap::new();
        let mut lookups = stream::iter(capped.to_vec())
            .map(|topic| async move {
                let result = self.lookup_topic(&topic, lookup).await;
                (topic, result)
            })
            .buffer_unordered(capped.len().max(1));

        let mut cancellable = true;
        loop {
            tokio::select! {
                biased;
                changed = shutdown.changed(), if cancellable => {
                    match changed {
                        Ok(()) => {
                            if *shutdown.borrow() {
                                debug!(completed = results.len(), "coverage analysis cancelled");
                                break;
                            }
                        }
                        // Sender dropped; cancellation can no longer occur
                        Err(_) => cancellable = false,
                    }
                }
                next = lookups.next() => match next {
                    Some((topic, result)) => {
                        results.insert(topic, result);
                    }
                    None => break,
                },
            }
        }

        results
    }

    /// One topic's lookup, with timeout and per-topic fault isolation.
    async fn lookup_topic(&self, topic: &str, lookup: &dyn PageLookup) -> CoverageResult {
        match timeout(self.config.lookup_timeout, lookup.search(topic)).await {
            Ok(Ok(pages)) => score_topic(topic, pages),
            Ok(Err(e)) => {
                warn!(topic = topic, error = %e, "lookup failed, treating topic as uncovered");
                CoverageResult::no_coverage(topic)
            }
            Err(_) => {
                warn!(
                    topic = topic,
                    timeout_ms = self.config.lookup_timeout.as_millis() as u64,
                    "lookup timed out, treating topic as uncovered"
                );
                CoverageResult::no_coverage(topic)
            }
        }
    }
}

/// Deduplicate page references by id and score relevance against the
/// topic: a keyword hit in the title is a high-relevance match.
fn score_topic(topic: &str, pages: Vec<PageRef>) -> CoverageResult {
    let needle = topic.to_ascii_lowercase();
    let mut seen = HashSet::new();
    let mut matches = Vec::new();

    for page in pages {
        if !seen.insert(page.id.clone()) {
            continue;
        }
        let relevance = if page.title.to_ascii_lowercase().contains(&needle) {
            Relevance::High
        } else {
            Relevance::Medium
        };
        matches.push(PageMatch {
            id: page.id,
            title: page.title,
            relevance,
        });
    }

    let approach = if matches.is_empty() {
        RecommendedApproach::CreateFirst
    } else {
        RecommendedApproach::ContextualFirst
    };

    CoverageResult {
        topic: topic.to_string(),
        matches,
        approach,
    }
}
