//! File change classification.
//!
//! Turns one raw [`ChangeRecord`] into a structured [`ChangeDescriptor`].
//! Classification is total: an empty or unrecognized path classifies as
//! `Other`, and a record with missing counts was already defaulted to zero
//! at deserialization. Two calls with the same record and thresholds
//! always produce the same descriptor.

pub mod keywords;

use docpilot_models::{ChangeCategory, ChangeDescriptor, ChangeRecord, ImpactLevel};

use crate::config::AnalysisThresholds;
use keywords::{categorize, has_breaking_keyword};

/// Classifies raw change records against configured thresholds.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    thresholds: AnalysisThresholds,
}

impl Classifier {
    /// Creates a classifier with the given thresholds.
    pub fn new(thresholds: AnalysisThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify one change record.
    pub fn classify(&self, record: &ChangeRecord) -> ChangeDescriptor {
        let t = &self.thresholds;
        let path = record.filename.to_ascii_lowercase();

        let category = categorize(&path);

        let is_breaking = has_breaking_keyword(&path)
            && (record.deletions > t.breaking_deletions || record.additions > t.breaking_additions);

        let impact = if is_breaking || category == ChangeCategory::Api {
            ImpactLevel::High
        } else if matches!(
            category,
            ChangeCategory::Configuration | ChangeCategory::Database | ChangeCategory::Infrastructure
        ) || record.additions > t.major_additions
        {
            ImpactLevel::Medium
        } else {
            ImpactLevel::Low
        };

        // Breaking schema/database changes are the ones that force
        // consumers through a migration; breaking API changes alone get a
        // migration *guide* via the planner but no migration flag here.
        let requires_migration = category == ChangeCategory::Database && is_breaking;

        ChangeDescriptor {
            filename: record.filename.clone(),
            change_type: record.status,
            category,
            additions: record.additions,
            deletions: record.deletions,
            is_breaking,
            impact,
            affects_api: category == ChangeCategory::Api || path.contains("api"),
            affects_ui: category == ChangeCategory::Frontend,
            requires_migration,
            is_significant: record.additions > t.significant_additions
                || record.deletions > t.significant_deletions,
        }
    }

    /// Classify a whole sequence of records, preserving input order.
    pub fn classify_all(&self, records: &[ChangeRecord]) -> Vec<ChangeDescriptor> {
        records.iter().map(|r| self.classify(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpilot_models::ChangeStatus;

    fn classify(filename: &str, additions: u32, deletions: u32) -> ChangeDescriptor {
        Classifier::default().classify(&ChangeRecord::new(filename, additions, deletions))
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = Classifier::default();
        let record = ChangeRecord::new("auth/api/login_controller.py", 60, 15);

        let a = classifier.classify(&record);
        let b = classifier.classify(&record);

        assert_eq!(a.category, b.category);
        assert_eq!(a.is_breaking, b.is_breaking);
        assert_eq!(a.impact, b.impact);
        assert_eq!(a.is_significant, b.is_significant);
    }

    #[test]
    fn test_scenario_api_controller() {
        // auth/api/login_controller.py, +60/-15
        let d = classify("auth/api/login_controller.py", 60, 15);

        assert_eq!(d.category, ChangeCategory::Api);
        assert!(d.is_breaking);
        assert_eq!(d.impact, ImpactLevel::High);
        assert!(d.affects_api);
        assert!(!d.affects_ui);
        assert!(!d.requires_migration);
        assert!(d.is_significant);
    }

    #[test]
    fn test_category_priority_api_over_config() {
        let d = classify("api/config/routes.yaml", 1, 0);
        assert_eq!(d.category, ChangeCategory::Api);
    }

    #[test]
    fn test_breaking_is_monotonic_in_deletions() {
        // Holding additions at 10 (below the breaking threshold), pushing
        // deletions past 10 flips is_breaking and never flips it back.
        let mut saw_breaking = false;
        for deletions in 0..40 {
            let d = classify("core/interface.rs", 10, deletions);
            if saw_breaking {
                assert!(d.is_breaking, "is_breaking regressed at deletions={}", deletions);
            }
            saw_breaking = d.is_breaking;
        }
        assert!(saw_breaking);
    }

    #[test]
    fn test_breaking_implies_high_impact() {
        for (path, additions, deletions) in [
            ("db/schema.sql", 0, 11),
            ("proto/contract.proto", 51, 0),
            ("core/interface.rs", 200, 200),
        ] {
            let d = classify(path, additions, deletions);
            assert!(d.is_breaking);
            assert_eq!(d.impact, ImpactLevel::High);
        }
    }

    #[test]
    fn test_breaking_needs_keyword_and_size() {
        // Large diff without a contract keyword is not breaking
        assert!(!classify("src/worker/job.rs", 500, 300).is_breaking);
        // Contract keyword with a small diff is not breaking
        assert!(!classify("db/schema.sql", 5, 5).is_breaking);
    }

    #[test]
    fn test_impact_tiers() {
        assert_eq!(classify("settings/config.toml", 1, 0).impact, ImpactLevel::Medium);
        assert_eq!(classify("migrations/0001.sql", 1, 0).impact, ImpactLevel::Medium);
        assert_eq!(classify("k8s/deploy.json", 1, 0).impact, ImpactLevel::Medium);
        // Big additions promote an otherwise-low file to medium
        assert_eq!(classify("src/helpers.rs", 101, 0).impact, ImpactLevel::Medium);
        assert_eq!(classify("src/helpers.rs", 3, 1).impact, ImpactLevel::Low);
    }

    #[test]
    fn test_requires_migration_database_only() {
        let d = classify("db/schema_users.sql", 0, 50);
        assert_eq!(d.category, ChangeCategory::Database);
        assert!(d.is_breaking);
        assert!(d.requires_migration);

        // Breaking API change does not flag a migration by itself
        let d = classify("v1/api/users.rs", 200, 100);
        assert!(d.is_breaking);
        assert!(!d.requires_migration);
    }

    #[test]
    fn test_affects_api_and_ui_flags() {
        let d = classify("misc/openapi-notes.txt", 1, 0);
        assert_eq!(d.category, ChangeCategory::Api);
        assert!(d.affects_api);

        let d = classify("web/components/button.tsx", 1, 0);
        assert!(d.affects_ui);
        assert!(!d.affects_api);
    }

    #[test]
    fn test_empty_filename_classifies_as_other() {
        let record = ChangeRecord {
            filename: String::new(),
            status: ChangeStatus::Modified,
            additions: 0,
            deletions: 0,
        };
        let d = Classifier::default().classify(&record);

        assert_eq!(d.category, ChangeCategory::Other);
        assert_eq!(d.impact, ImpactLevel::Low);
        assert!(!d.is_breaking);
        assert!(!d.is_significant);
    }

    #[test]
    fn test_custom_thresholds() {
        let classifier = Classifier::new(AnalysisThresholds::new().with_significant(2, 1));
        let d = classifier.classify(&ChangeRecord::new("src/lib.rs", 3, 0));
        assert!(d.is_significant);
    }
}
