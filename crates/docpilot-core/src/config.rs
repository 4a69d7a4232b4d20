//! Named threshold and planner configuration.

/// Diff-size thresholds driving classification and planning decisions.
///
/// The source variants of this logic disagreed on the exact constants, so
/// every threshold is a named, overridable field rather than a literal
/// buried in a predicate.
#[derive(Debug, Clone)]
pub struct AnalysisThresholds {
    /// Additions above which a file counts as significant.
    pub significant_additions: u32,
    /// Deletions above which a file counts as significant.
    pub significant_deletions: u32,
    /// Additions above which a contract-sensitive path counts as breaking.
    pub breaking_additions: u32,
    /// Deletions above which a contract-sensitive path counts as breaking.
    pub breaking_deletions: u32,
    /// Additions above which any file is at least medium impact.
    pub major_additions: u32,
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        Self {
            significant_additions: 20,
            significant_deletions: 10,
            breaking_additions: 50,
            breaking_deletions: 10,
            major_additions: 100,
        }
    }
}

impl AnalysisThresholds {
    /// Creates thresholds with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the significance thresholds.
    pub fn with_significant(mut self, additions: u32, deletions: u32) -> Self {
        self.significant_additions = additions;
        self.significant_deletions = deletions;
        self
    }

    /// Sets the breaking-change thresholds.
    pub fn with_breaking(mut self, additions: u32, deletions: u32) -> Self {
        self.breaking_additions = additions;
        self.breaking_deletions = deletions;
        self
    }

    /// Sets the major-additions threshold.
    pub fn with_major_additions(mut self, additions: u32) -> Self {
        self.major_additions = additions;
        self
    }
}

/// Configuration for the action planner.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Knowledge-base space targeted by planned actions.
    pub space_key: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            space_key: "DOC".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Creates a planner config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target space key.
    pub fn with_space_key(mut self, key: impl Into<String>) -> Self {
        self.space_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = AnalysisThresholds::default();
        assert_eq!(t.significant_additions, 20);
        assert_eq!(t.significant_deletions, 10);
        assert_eq!(t.breaking_additions, 50);
        assert_eq!(t.breaking_deletions, 10);
        assert_eq!(t.major_additions, 100);
    }

    #[test]
    fn test_threshold_builder() {
        let t = AnalysisThresholds::new()
            .with_significant(5, 2)
            .with_breaking(30, 8)
            .with_major_additions(80);

        assert_eq!(t.significant_additions, 5);
        assert_eq!(t.significant_deletions, 2);
        assert_eq!(t.breaking_additions, 30);
        assert_eq!(t.breaking_deletions, 8);
        assert_eq!(t.major_additions, 80);
    }

    #[test]
    fn test_planner_config_builder() {
        let config = PlannerConfig::new().with_space_key("ENG");
        assert_eq!(config.space_key, "ENG");
        assert_eq!(PlannerConfig::default().space_key, "DOC");
    }
}
