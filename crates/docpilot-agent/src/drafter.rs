//! Drafting loop: turn a planned action into page content.

use tracing::{debug, warn};

use docpilot_models::{ChangeSetSummary, ContentStrategy, DocumentationAction};
use docpilot_sources::DocSource;

use crate::client::{ChatMessage, OpenRouterClient};
use crate::config::ModelConfig;
use crate::error::{AgentError, Result};
use crate::wiki_tools::{wiki_tool_definitions, WikiToolExecutor};

/// Default cap on model/tool round trips per draft.
const DEFAULT_MAX_ITERATIONS: u32 = 8;

/// System prompt for the drafting agent.
const SYSTEM_PROMPT: &str = "\
You are a documentation writer producing knowledge-base pages from a \
structured action plan. You receive one planned action (what page to \
create or update, why, for which audience) plus a summary of the code \
changes behind it.

Use the available tools to explore existing documentation before writing:
- search_pages: find related pages with a CQL query
- get_page: read a specific page's content

Guidelines:
- For complete_content actions, write a full page in Confluence storage \
format (XHTML).
- For contextual_updates actions, reproduce only the sections that need \
to change, each introduced by a line stating where it belongs (e.g. \
\"After heading: Authentication\").
- Match the tone and structure of the pages you inspected.
- Cover breaking changes and migrations prominently when flagged.
- Return only the page markup, no commentary.";

/// A drafted page produced for one action.
#[derive(Debug, Clone)]
pub struct PageDraft {
    /// Page title (taken from the action).
    pub title: String,

    /// Page body in storage format, or located section edits for
    /// contextual updates.
    pub body: String,
}

/// Drafts page content for planned documentation actions.
pub struct ContentDrafter {
    client: OpenRouterClient,
    config: ModelConfig,
    max_iterations: u32,
}

impl ContentDrafter {
    /// Create a drafter with the given client and model configuration.
    pub fn new(client: OpenRouterClient, config: ModelConfig) -> Self {
        Self {
            client,
            config,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the tool-loop iteration cap.
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max;
        self
    }

    /// Draft content for one action, exploring the knowledge base through
    /// tool calls as needed.
    pub async fn draft(
        &self,
        action: &DocumentationAction,
        summary: &ChangeSetSummary,
        source: &dyn DocSource,
    ) -> Result<PageDraft> {
        let tools = wiki_tool_definitions();
        let executor = WikiToolExecutor::new(source);

        let mut messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(drafting_prompt(action, summary)),
        ];

        for iteration in 0..self.max_iterations {
            let response = self
                .client
                .chat(&self.config, messages.clone(), Some(&tools))
                .await?;

            let calls = response.tool_calls();
            if calls.is_empty() {
                let body = response
                    .content()
                    .filter(|c| !c.trim().is_empty())
                    .ok_or_else(|| {
                        AgentError::ResponseParse("model returned empty content".to_string())
                    })?;
                debug!(
                    title = %action.title,
                    iterations = iteration + 1,
                    "draft complete"
                );
                return Ok(PageDraft {
                    title: action.title.clone(),
                    body: body.to_string(),
                });
            }

            let message = response
                .message()
                .ok_or_else(|| AgentError::ResponseParse("response without choices".to_string()))?;
            messages.push(ChatMessage::from_response(message));

            for call in calls {
                // Feed tool failures back to the model so it can adjust
                // rather than aborting the draft
                let output = match executor.execute(&call).await {
                    Ok(output) => output,
                    Err(e) => {
                        warn!(tool = %call.name, error = %e, "wiki tool failed");
                        format!("Error: {}", e)
                    }
                };
                messages.push(ChatMessage::tool(&call.id, output));
            }
        }

        Err(AgentError::MaxIterationsExceeded(self.max_iterations))
    }
}

/// Build the user prompt for one action.
fn drafting_prompt(action: &DocumentationAction, summary: &ChangeSetSummary) -> String {
    let strategy_note = match action.strategy {
        ContentStrategy::CompleteContent => "Write a complete new page.",
        ContentStrategy::ContextualUpdates => {
            "Produce located section edits for the existing page."
        }
        ContentStrategy::Both => {
            "Write a complete new migration guide, then list related pages that need review."
        }
    };

    format!(
        "Planned action: {kind:?} \"{title}\" in space {space} \
(priority {priority:?}, strategy {strategy:?}).\n\
Reason: {reason}\n\
Audience: {audiences}\n\
Breaking changes: {breaking}; migration required: {migration}\n\n\
Change-set summary: {narrative}\n\n\
{strategy_note}",
        kind = action.kind,
        title = action.title,
        space = action.space_key,
        priority = action.priority,
        strategy = action.strategy,
        reason = action.reason,
        audiences = action.audiences.join(", "),
        breaking = action.breaking_changes,
        migration = action.migration_required,
        narrative = summary.narrative,
        strategy_note = strategy_note,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpilot_models::{ActionKind, ActionPriority};

    fn sample_action() -> DocumentationAction {
        DocumentationAction {
            kind: ActionKind::CreatePage,
            space_key: "DOC".to_string(),
            title: "API Reference".to_string(),
            priority: ActionPriority::Critical,
            strategy: ContentStrategy::CompleteContent,
            reason: "2 significant api change(s); no existing coverage found".to_string(),
            audiences: vec!["developers".to_string()],
            breaking_changes: true,
            migration_required: false,
        }
    }

    #[test]
    fn test_drafting_prompt_mentions_action_fields() {
        let mut summary = ChangeSetSummary::default();
        summary.narrative = "3 file(s) changed, 1 high-impact".to_string();

        let prompt = drafting_prompt(&sample_action(), &summary);

        assert!(prompt.contains("API Reference"));
        assert!(prompt.contains("space DOC"));
        assert!(prompt.contains("no existing coverage found"));
        assert!(prompt.contains("3 file(s) changed"));
        assert!(prompt.contains("Write a complete new page."));
    }

    #[test]
    fn test_drafting_prompt_strategy_notes() {
        let mut action = sample_action();
        let summary = ChangeSetSummary::default();

        action.strategy = ContentStrategy::ContextualUpdates;
        assert!(drafting_prompt(&action, &summary).contains("located section edits"));

        action.strategy = ContentStrategy::Both;
        assert!(drafting_prompt(&action, &summary).contains("migration guide"));
    }
}
