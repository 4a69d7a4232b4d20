//! The page lookup capability consumed by the analyzer.

use async_trait::async_trait;
use thiserror::Error;

use docpilot_models::PageRef;

/// Errors a lookup backend can report.
///
/// The analyzer recovers from every variant by treating the topic as
/// uncovered; these exist so backends can report what went wrong for
/// logging.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The backend call failed (network, auth, rate limit, ...).
    #[error("lookup backend error: {0}")]
    Backend(String),

    /// The backend responded with something we could not decode.
    #[error("lookup response decode error: {0}")]
    Decode(String),
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

/// Capability to search the knowledge base for pages about a topic.
///
/// Implementations own the translation from a plain topic keyword to the
/// backend's query grammar (e.g. CQL); the analyzer never composes
/// backend-specific queries itself.
#[async_trait]
pub trait PageLookup: Send + Sync {
    /// Search for pages relevant to a topic keyword.
    ///
    /// Returned references may contain duplicates; the analyzer
    /// deduplicates by page id before scoring.
    async fn search(&self, topic: &str) -> Result<Vec<PageRef>>;
}
