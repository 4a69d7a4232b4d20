//! Error type for CLI commands.

use thiserror::Error;

/// Errors surfaced to the CLI user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Upstream fetch failed (change source or documentation source).
    #[error("upstream error: {0}")]
    Source(#[from] docpilot_sources::SourceError),

    /// Content drafting failed.
    #[error("drafting error: {0}")]
    Agent(#[from] docpilot_agent::AgentError),

    /// Reading or writing a report file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Report (de)serialization failed.
    #[error("report format error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
