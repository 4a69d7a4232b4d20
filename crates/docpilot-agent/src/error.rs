//! Error types for the agent crate.

use thiserror::Error;

/// Errors that can occur while drafting content.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Configuration error (missing API key, bad settings).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Model invocation failed.
    #[error("model invocation failed: {0}")]
    ModelInvocation(String),

    /// Response parsing failed.
    #[error("failed to parse response: {0}")]
    ResponseParse(String),

    /// Tool execution failed.
    #[error("tool execution failed: {tool_name}: {message}")]
    ToolExecution {
        /// Name of the tool that failed.
        tool_name: String,
        /// Error message.
        message: String,
    },

    /// The model requested a tool we do not provide.
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Maximum iterations exceeded in the tool loop.
    #[error("maximum iterations ({0}) exceeded in tool execution loop")]
    MaxIterationsExceeded(u32),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgentError::ToolExecution {
            tool_name: "search_pages".into(),
            message: "rate limited".into(),
        };
        assert_eq!(
            err.to_string(),
            "tool execution failed: search_pages: rate limited"
        );

        let err = AgentError::MaxIterationsExceeded(8);
        assert_eq!(
            err.to_string(),
            "maximum iterations (8) exceeded in tool execution loop"
        );
    }
}
