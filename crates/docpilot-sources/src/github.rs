//! GitHub pull-request change source.

use async_trait::async_trait;
use tracing::debug;

use docpilot_models::ChangeRecord;

use crate::error::{Result, SourceError};

/// Environment variable for the GitHub API token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Default GitHub REST API base URL.
const GITHUB_API_URL: &str = "https://api.github.com";

/// Page size for the pull-request files listing.
const FILES_PER_PAGE: u32 = 100;

/// Capability to list the files changed in a change request.
#[async_trait]
pub trait ChangeSource: Send + Sync {
    /// List the changed files of a pull request, in the order the host
    /// reports them.
    ///
    /// `repo` is an `owner/repo` identifier.
    async fn list_changed_files(&self, repo: &str, number: u64) -> Result<Vec<ChangeRecord>>;
}

/// GitHub-backed change source.
#[derive(Clone)]
pub struct GithubSource {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl GithubSource {
    /// Create a source with the given API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, GITHUB_API_URL)
    }

    /// Create a source against a non-default base URL (GitHub Enterprise,
    /// test servers).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: base_url.into(),
        }
    }

    /// Create a source from the `GITHUB_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(GITHUB_TOKEN_ENV).map_err(|_| {
            SourceError::Configuration(format!("missing {} environment variable", GITHUB_TOKEN_ENV))
        })?;
        Ok(Self::new(token))
    }
}

#[async_trait]
impl ChangeSource for GithubSource {
    async fn list_changed_files(&self, repo: &str, number: u64) -> Result<Vec<ChangeRecord>> {
        let url = format!("{}/repos/{}/pulls/{}/files", self.base_url, repo, number);
        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            debug!(repo = repo, number = number, page = page, "fetching changed files");

            let response = self
                .client
                .get(&url)
                .query(&[("per_page", FILES_PER_PAGE), ("page", page)])
                .header("Authorization", format!("Bearer {}", self.token))
                .header("Accept", "application/vnd.github.v3+json")
                .header("User-Agent", "docpilot")
                .send()
                .await
                .map_err(|e| SourceError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(SourceError::from_status(
                    status,
                    &format!("pull request {}#{}", repo, number),
                ));
            }

            let batch: Vec<ChangeRecord> = response
                .json()
                .await
                .map_err(|e| SourceError::Decode(e.to_string()))?;

            let done = (batch.len() as u32) < FILES_PER_PAGE;
            records.extend(batch);
            if done {
                break;
            }
            page += 1;
        }

        debug!(repo = repo, number = number, files = records.len(), "changed files fetched");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpilot_models::ChangeStatus;

    #[test]
    fn test_files_payload_deserialization() {
        // Shape of the GitHub pulls/files payload, extra fields ignored
        let json = r#"[
            {
                "sha": "bbcd538c8e72b8c175046e27cc8f907076331401",
                "filename": "auth/api/login_controller.py",
                "status": "modified",
                "additions": 60,
                "deletions": 15,
                "changes": 75,
                "blob_url": "https://example.invalid/blob",
                "patch": "@@ -132,7 +132,7 @@"
            },
            {
                "filename": "docs/old_setup.md",
                "status": "removed",
                "additions": 0,
                "deletions": 120
            }
        ]"#;

        let records: Vec<ChangeRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].filename, "auth/api/login_controller.py");
        assert_eq!(records[0].additions, 60);
        assert_eq!(records[1].status, ChangeStatus::Deleted);
    }

    #[test]
    fn test_from_env_missing_token() {
        std::env::remove_var(GITHUB_TOKEN_ENV);
        let result = GithubSource::from_env();
        assert!(matches!(result, Err(SourceError::Configuration(_))));
    }

    #[test]
    fn test_custom_base_url() {
        let source = GithubSource::with_base_url("t", "http://localhost:9999");
        assert_eq!(source.base_url, "http://localhost:9999");
    }
}
