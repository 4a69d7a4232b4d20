//! Error types for upstream fetches.

use thiserror::Error;

/// Errors from the change-source or documentation-source backends.
///
/// Always recoverable by the caller (retry or abort the run); no variant
/// corrupts internal state.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Authentication or authorization failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The backend is rate limiting us.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport-level failure (connect, TLS, read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response could not be decoded.
    #[error("response decode error: {0}")]
    Decode(String),

    /// Client construction failed (missing or invalid settings).
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

impl SourceError {
    /// Map an HTTP status to the matching error variant.
    pub(crate) fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            401 | 403 => Self::Auth(format!("{}: HTTP {}", context, status)),
            429 => Self::RateLimited(format!("{}: HTTP {}", context, status)),
            404 => Self::NotFound(context.to_string()),
            _ => Self::Transport(format!("{}: HTTP {}", context, status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            SourceError::from_status(StatusCode::UNAUTHORIZED, "x"),
            SourceError::Auth(_)
        ));
        assert!(matches!(
            SourceError::from_status(StatusCode::FORBIDDEN, "x"),
            SourceError::Auth(_)
        ));
        assert!(matches!(
            SourceError::from_status(StatusCode::TOO_MANY_REQUESTS, "x"),
            SourceError::RateLimited(_)
        ));
        assert!(matches!(
            SourceError::from_status(StatusCode::NOT_FOUND, "x"),
            SourceError::NotFound(_)
        ));
        assert!(matches!(
            SourceError::from_status(StatusCode::BAD_GATEWAY, "x"),
            SourceError::Transport(_)
        ));
    }

    #[test]
    fn test_error_display() {
        let err = SourceError::NotFound("pull request acme/widgets#42".to_string());
        assert_eq!(err.to_string(), "not found: pull request acme/widgets#42");
    }
}
