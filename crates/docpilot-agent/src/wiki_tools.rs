//! Knowledge-base exploration tools exposed to the model.

use serde_json::json;
use tracing::debug;

use docpilot_sources::DocSource;

use crate::error::{AgentError, Result};
use crate::tool::{ToolCall, ToolDefinition};

/// Maximum characters of page body returned to the model.
const PAGE_PREVIEW_CHARS: usize = 1000;

/// Definitions of the wiki tools.
pub fn wiki_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "search_pages",
            "Search existing documentation pages using a CQL query string.",
            json!({
                "type": "object",
                "properties": {
                    "cql": {
                        "type": "string",
                        "description": "CQL query, e.g. type = page AND title ~ \"billing\""
                    }
                },
                "required": ["cql"]
            }),
        ),
        ToolDefinition::new(
            "get_page",
            "Get the title and a content preview of a documentation page by its ID.",
            json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string", "description": "Page ID"}
                },
                "required": ["id"]
            }),
        ),
    ]
}

/// Executes wiki tool calls against a documentation source.
pub struct WikiToolExecutor<'a> {
    source: &'a dyn DocSource,
}

impl<'a> WikiToolExecutor<'a> {
    /// Create an executor over the given source.
    pub fn new(source: &'a dyn DocSource) -> Self {
        Self { source }
    }

    /// Execute one tool call, returning the tool result as a string for
    /// the model.
    pub async fn execute(&self, call: &ToolCall) -> Result<String> {
        debug!(tool = %call.name, "executing wiki tool");
        match call.name.as_str() {
            "search_pages" => self.search_pages(call).await,
            "get_page" => self.get_page(call).await,
            other => Err(AgentError::ToolNotFound(other.to_string())),
        }
    }

    async fn search_pages(&self, call: &ToolCall) -> Result<String> {
        let cql = call
            .str_arg("cql")
            .ok_or_else(|| AgentError::ToolExecution {
                tool_name: call.name.clone(),
                message: "missing cql argument".to_string(),
            })?;

        let pages = self
            .source
            .search(cql)
            .await
            .map_err(|e| AgentError::ToolExecution {
                tool_name: call.name.clone(),
                message: e.to_string(),
            })?;

        if pages.is_empty() {
            return Ok("No pages found for this query.".to_string());
        }
        Ok(serde_json::to_string_pretty(&pages)?)
    }

    async fn get_page(&self, call: &ToolCall) -> Result<String> {
        let id = call.str_arg("id").ok_or_else(|| AgentError::ToolExecution {
            tool_name: call.name.clone(),
            message: "missing id argument".to_string(),
        })?;

        let page = self
            .source
            .get_page(id)
            .await
            .map_err(|e| AgentError::ToolExecution {
                tool_name: call.name.clone(),
                message: e.to_string(),
            })?;

        let preview: String = page.body.chars().take(PAGE_PREVIEW_CHARS).collect();
        Ok(serde_json::to_string_pretty(&json!({
            "id": page.id,
            "title": page.title,
            "space_key": page.space_key,
            "content_preview": preview,
        }))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docpilot_models::PageRef;
    use docpilot_sources::{Page, SourceError, SpaceRef};
    use serde_json::json;

    struct FakeSource;

    #[async_trait]
    impl DocSource for FakeSource {
        async fn list_spaces(&self) -> docpilot_sources::Result<Vec<SpaceRef>> {
            Ok(vec![])
        }

        async fn search(&self, cql: &str) -> docpilot_sources::Result<Vec<PageRef>> {
            if cql.contains("empty") {
                return Ok(vec![]);
            }
            Ok(vec![PageRef::new("123", "API Reference")])
        }

        async fn get_page(&self, id: &str) -> docpilot_sources::Result<Page> {
            if id == "missing" {
                return Err(SourceError::NotFound(format!("page {}", id)));
            }
            Ok(Page {
                id: id.to_string(),
                title: "API Reference".to_string(),
                space_key: Some("DOC".to_string()),
                version: Some(3),
                body: "x".repeat(5000),
            })
        }
    }

    #[tokio::test]
    async fn test_search_pages_tool() {
        let executor = WikiToolExecutor::new(&FakeSource);
        let call = ToolCall::with_id("c1", "search_pages", json!({"cql": "type = page"}));

        let result = executor.execute(&call).await.unwrap();
        assert!(result.contains("API Reference"));

        let call = ToolCall::with_id("c2", "search_pages", json!({"cql": "empty"}));
        let result = executor.execute(&call).await.unwrap();
        assert_eq!(result, "No pages found for this query.");
    }

    #[tokio::test]
    async fn test_get_page_tool_truncates_preview() {
        let executor = WikiToolExecutor::new(&FakeSource);
        let call = ToolCall::with_id("c1", "get_page", json!({"id": "123"}));

        let result = executor.execute(&call).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(
            value["content_preview"].as_str().unwrap().len(),
            PAGE_PREVIEW_CHARS
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_rejected() {
        let executor = WikiToolExecutor::new(&FakeSource);
        let call = ToolCall::with_id("c1", "delete_everything", json!({}));

        let result = executor.execute(&call).await;
        assert!(matches!(result, Err(AgentError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_tool_failure_is_typed() {
        let executor = WikiToolExecutor::new(&FakeSource);
        let call = ToolCall::with_id("c1", "get_page", json!({"id": "missing"}));

        let result = executor.execute(&call).await;
        assert!(matches!(result, Err(AgentError::ToolExecution { .. })));
    }
}
