//! Confluence documentation source.
//!
//! Implements the [`DocSource`] capability set (spaces, CQL search, page
//! retrieval) and the coverage analyzer's [`PageLookup`]: the translation
//! from a plain topic keyword to CQL happens here, so the core never sees
//! the query grammar.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use docpilot_coverage::{LookupError, PageLookup};
use docpilot_models::PageRef;

use crate::error::{Result, SourceError};

/// Environment variable for the Confluence base URL.
pub const CONFLUENCE_URL_ENV: &str = "CONFLUENCE_URL";

/// Environment variable for the Confluence user name.
pub const CONFLUENCE_USERNAME_ENV: &str = "CONFLUENCE_USERNAME";

/// Environment variable for the Confluence API token.
pub const CONFLUENCE_API_TOKEN_ENV: &str = "CONFLUENCE_API_TOKEN";

/// Search result limit per CQL query.
const SEARCH_LIMIT: u32 = 25;

/// Reference to a Confluence space.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaceRef {
    /// Space key.
    pub key: String,
    /// Human-readable space name.
    #[serde(default)]
    pub name: String,
}

/// A retrieved page with content and metadata.
#[derive(Debug, Clone)]
pub struct Page {
    /// Page identifier.
    pub id: String,
    /// Page title.
    pub title: String,
    /// Key of the containing space, when reported.
    pub space_key: Option<String>,
    /// Page version number, when reported.
    pub version: Option<u32>,
    /// Page body in storage format.
    pub body: String,
}

/// Capability set over the knowledge base.
#[async_trait]
pub trait DocSource: Send + Sync {
    /// List available spaces.
    async fn list_spaces(&self) -> Result<Vec<SpaceRef>>;

    /// Search pages with a CQL query string.
    async fn search(&self, cql: &str) -> Result<Vec<PageRef>>;

    /// Retrieve one page with body and metadata.
    async fn get_page(&self, id: &str) -> Result<Page>;
}

/// Confluence Cloud REST client with basic authentication.
#[derive(Clone)]
pub struct ConfluenceSource {
    client: reqwest::Client,
    base_url: String,
    username: String,
    api_token: String,
}

impl ConfluenceSource {
    /// Create a client for the given site.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.into(),
            api_token: api_token.into(),
        }
    }

    /// Create a client from `CONFLUENCE_URL`, `CONFLUENCE_USERNAME` and
    /// `CONFLUENCE_API_TOKEN` environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url = require_env(CONFLUENCE_URL_ENV)?;
        Url::parse(&base_url).map_err(|e| {
            SourceError::Configuration(format!("invalid {}: {}", CONFLUENCE_URL_ENV, e))
        })?;
        let username = require_env(CONFLUENCE_USERNAME_ENV)?;
        let api_token = require_env(CONFLUENCE_API_TOKEN_ENV)?;
        Ok(Self::new(base_url, username, api_token))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .basic_auth(&self.username, Some(&self.api_token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status, context));
        }

        response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DocSource for ConfluenceSource {
    async fn list_spaces(&self) -> Result<Vec<SpaceRef>> {
        let response: SpacesResponse = self
            .get_json(
                "/rest/api/space",
                &[("start", "0".to_string()), ("limit", "50".to_string())],
                "space listing",
            )
            .await?;
        Ok(response.results)
    }

    async fn search(&self, cql: &str) -> Result<Vec<PageRef>> {
        debug!(cql = cql, "searching pages");
        let response: SearchResponse = self
            .get_json(
                "/rest/api/search",
                &[
                    ("cql", cql.to_string()),
                    ("limit", SEARCH_LIMIT.to_string()),
                ],
                "page search",
            )
            .await?;

        Ok(response
            .results
            .into_iter()
            .filter_map(SearchResult::into_page_ref)
            .collect())
    }

    async fn get_page(&self, id: &str) -> Result<Page> {
        let response: PageResponse = self
            .get_json(
                &format!("/rest/api/content/{}", id),
                &[("expand", "body.storage,space,version".to_string())],
                &format!("page {}", id),
            )
            .await?;

        Ok(Page {
            id: response.id,
            title: response.title,
            space_key: response.space.and_then(|s| s.key),
            version: response.version.map(|v| v.number),
            body: response
                .body
                .and_then(|b| b.storage)
                .map(|s| s.value)
                .unwrap_or_default(),
        })
    }
}

#[async_trait]
impl PageLookup for ConfluenceSource {
    async fn search(&self, topic: &str) -> std::result::Result<Vec<PageRef>, LookupError> {
        let cql = topic_cql(topic);
        DocSource::search(self, &cql).await.map_err(|e| match e {
            SourceError::Decode(msg) => LookupError::Decode(msg),
            other => LookupError::Backend(other.to_string()),
        })
    }
}

/// Compose the CQL query probing coverage for a topic keyword.
fn topic_cql(topic: &str) -> String {
    let escaped = topic.replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        r#"type = page AND (title ~ "{}" OR text ~ "{}")"#,
        escaped, escaped
    )
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| SourceError::Configuration(format!("missing {} environment variable", name)))
}

// Wire types. The search endpoint nests page data under `content` for
// content hits and inline for everything else; take whichever is present.

#[derive(Debug, Deserialize)]
struct SpacesResponse {
    #[serde(default)]
    results: Vec<SpaceRef>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<ContentBrief>,
    #[serde(default)]
    space: Option<SpaceBrief>,
}

impl SearchResult {
    fn into_page_ref(self) -> Option<PageRef> {
        let (content_id, content_title) = match self.content {
            Some(c) => (c.id, c.title),
            None => (None, None),
        };
        let id = content_id.or(self.id)?;
        let title = content_title.or(self.title).unwrap_or_default();
        Some(PageRef {
            id,
            title,
            space_key: self.space.and_then(|s| s.key),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ContentBrief {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpaceBrief {
    #[serde(default)]
    key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    id: String,
    title: String,
    #[serde(default)]
    space: Option<SpaceBrief>,
    #[serde(default)]
    version: Option<VersionBrief>,
    #[serde(default)]
    body: Option<BodyBrief>,
}

#[derive(Debug, Deserialize)]
struct VersionBrief {
    number: u32,
}

#[derive(Debug, Deserialize)]
struct BodyBrief {
    #[serde(default)]
    storage: Option<StorageBrief>,
}

#[derive(Debug, Deserialize)]
struct StorageBrief {
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_cql_composition() {
        assert_eq!(
            topic_cql("billing"),
            r#"type = page AND (title ~ "billing" OR text ~ "billing")"#
        );
        // Quotes in a topic must not break the query
        assert_eq!(
            topic_cql(r#"a"b"#),
            r#"type = page AND (title ~ "a\"b" OR text ~ "a\"b")"#
        );
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "results": [
                {
                    "content": {"id": "123", "title": "API Reference", "type": "page"},
                    "title": "API Reference @@hl@@",
                    "space": {"key": "DOC"}
                },
                {
                    "id": "456",
                    "title": "Setup Guide"
                },
                {
                    "title": "no id, dropped"
                }
            ],
            "totalSize": 3
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let pages: Vec<PageRef> = response
            .results
            .into_iter()
            .filter_map(SearchResult::into_page_ref)
            .collect();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].id, "123");
        assert_eq!(pages[0].title, "API Reference");
        assert_eq!(pages[0].space_key.as_deref(), Some("DOC"));
        assert_eq!(pages[1].id, "456");
    }

    #[test]
    fn test_page_response_deserialization() {
        let json = r#"{
            "id": "123",
            "title": "API Reference",
            "space": {"key": "DOC", "name": "Documentation"},
            "version": {"number": 7},
            "body": {"storage": {"value": "<p>hello</p>", "representation": "storage"}}
        }"#;

        let response: PageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, "123");
        assert_eq!(response.version.unwrap().number, 7);
        assert_eq!(response.body.unwrap().storage.unwrap().value, "<p>hello</p>");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let source = ConfluenceSource::new("https://wiki.example.com/", "u", "t");
        assert_eq!(source.base_url, "https://wiki.example.com");
    }
}
