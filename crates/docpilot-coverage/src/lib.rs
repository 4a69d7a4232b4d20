//! Documentation coverage gap analysis.
//!
//! Given a set of topic keywords and a [`PageLookup`] capability backed by
//! the knowledge base, determines per topic whether relevant documentation
//! already exists. Lookups are independent reads: they run with bounded
//! concurrency, each wrapped in a timeout, and one topic's failure never
//! aborts the others: a failed or timed-out lookup degrades that topic to
//! "no coverage found".

pub mod analyzer;
pub mod lookup;

pub use analyzer::{CoverageAnalyzer, CoverageConfig};
pub use lookup::{LookupError, PageLookup};
