//! Path keyword tables for category assignment.

use docpilot_models::ChangeCategory;

/// Keywords whose presence in a path makes a large diff breaking.
pub const BREAKING_KEYWORDS: &[&str] = &["api", "interface", "contract", "schema"];

/// Ordered (category, keywords) table for path classification.
///
/// Entries are checked in order and the FIRST category with any matching
/// keyword wins, so overlapping matches resolve deterministically: a path
/// containing both "api" and "test" keywords classifies as api. Paths are
/// lowercased before matching; `Other` is the fallback and has no entry.
pub const CATEGORY_KEYWORDS: &[(ChangeCategory, &[&str])] = &[
    (
        ChangeCategory::Api,
        &["api", "endpoint", "route", "controller", "graphql", "grpc"],
    ),
    (
        ChangeCategory::Configuration,
        &["config", "setting", ".env", "environment", ".yaml", ".yml", ".toml", ".ini"],
    ),
    (
        ChangeCategory::Frontend,
        &["frontend", "component", "view", ".css", ".scss", ".html", ".jsx", ".tsx", ".vue"],
    ),
    (
        ChangeCategory::Backend,
        &["backend", "server", "service", "worker", "handler"],
    ),
    (
        ChangeCategory::Test,
        &["test", "spec", "__tests__", "fixture"],
    ),
    (
        ChangeCategory::Documentation,
        &["readme", "docs/", "doc/", "guide", ".md", ".rst"],
    ),
    (
        ChangeCategory::Database,
        &["migration", "schema", ".sql", "database", "db/"],
    ),
    (
        ChangeCategory::Infrastructure,
        &["dockerfile", "docker", "kubernetes", "k8s", "terraform", "helm", ".github/", "deploy", "infra"],
    ),
];

/// Classify a lowercased path against the ordered keyword table.
pub fn categorize(path: &str) -> ChangeCategory {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| path.contains(k)) {
            return *category;
        }
    }
    ChangeCategory::Other
}

/// Whether a lowercased path mentions a contract-sensitive keyword.
pub fn has_breaking_keyword(path: &str) -> bool {
    BREAKING_KEYWORDS.iter().any(|k| path.contains(k))
}
