//! OpenRouter chat-completions client with tool calling.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, trace};

use crate::config::ModelConfig;
use crate::error::{AgentError, Result};
use crate::tool::{ToolCall, ToolDefinition};

/// Environment variable for the OpenRouter API key.
pub const OPENROUTER_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// OpenRouter chat completions endpoint.
const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// OpenRouter API client.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
}

impl OpenRouterClient {
    /// Create a client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a client from the `OPENROUTER_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(OPENROUTER_API_KEY_ENV).map_err(|_| {
            AgentError::Configuration(format!(
                "missing {} environment variable",
                OPENROUTER_API_KEY_ENV
            ))
        })?;
        Ok(Self::new(api_key))
    }

    /// Send a chat completion request.
    pub async fn chat(
        &self,
        config: &ModelConfig,
        messages: Vec<ChatMessage>,
        tools: Option<&[ToolDefinition]>,
    ) -> Result<ChatResponse> {
        trace!(model = %config.model, messages = messages.len(), "sending chat request");

        let mut request = json!({
            "model": config.model,
            "messages": messages,
            "max_tokens": config.max_tokens,
            "temperature": config.temperature,
        });
        if let Some(tools) = tools {
            request["tools"] = tools
                .iter()
                .map(|t| {
                    json!({
                        "type": "function",
                        "function": {
                            "name": t.name,
                            "description": t.description,
                            "parameters": t.parameters,
                        }
                    })
                })
                .collect();
        }

        let response = self
            .client
            .post(OPENROUTER_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("X-Title", "Docpilot")
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::ModelInvocation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AgentError::ModelInvocation(format!(
                "OpenRouter API error {}: {}",
                status, text
            )));
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AgentError::ResponseParse(format!("invalid response body: {}", e)))?;

        debug!(
            tokens = response.usage.as_ref().map_or(0, |u| u.total_tokens),
            tool_calls = response.tool_calls().len(),
            "chat response received"
        );

        Ok(response)
    }
}

/// A message in the chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender.
    pub role: String,

    /// Text content of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tool calls made by the assistant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,

    /// Tool call ID for tool result messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::plain("system", content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::plain("user", content)
    }

    /// Create a tool result message.
    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    /// Echo an assistant response (including its tool calls) back into the
    /// conversation.
    pub fn from_response(msg: &ResponseMessage) -> Self {
        Self {
            role: "assistant".to_string(),
            content: msg.content.clone(),
            tool_calls: msg.tool_calls.clone(),
            tool_call_id: None,
        }
    }

    fn plain(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }
}

/// Tool call in wire format (arguments are a JSON-encoded string).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireToolCall {
    /// Call identifier.
    pub id: String,

    /// Always "function".
    #[serde(rename = "type")]
    pub call_type: String,

    /// Function name and encoded arguments.
    pub function: WireToolFunction,
}

impl WireToolCall {
    /// Decode into a [`ToolCall`] with parsed arguments.
    pub fn decode(&self) -> Result<ToolCall> {
        let arguments = serde_json::from_str(&self.function.arguments).map_err(|e| {
            AgentError::ResponseParse(format!("invalid tool arguments JSON: {}", e))
        })?;
        Ok(ToolCall::with_id(&self.id, &self.function.name, arguments))
    }
}

/// Function name and JSON-encoded arguments of a wire tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireToolFunction {
    /// Function name.
    pub name: String,

    /// JSON-encoded arguments.
    pub arguments: String,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices.
    pub choices: Vec<ChatChoice>,

    /// Token usage, when reported.
    pub usage: Option<ChatUsage>,
}

impl ChatResponse {
    /// The first choice's message.
    pub fn message(&self) -> Option<&ResponseMessage> {
        self.choices.first().map(|c| &c.message)
    }

    /// Text content of the first choice.
    pub fn content(&self) -> Option<&str> {
        self.message().and_then(|m| m.content.as_deref())
    }

    /// Decoded tool calls of the first choice; calls with undecodable
    /// arguments are skipped.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.message()
            .and_then(|m| m.tool_calls.as_ref())
            .map_or(Vec::new(), |calls| {
                calls.iter().filter_map(|c| c.decode().ok()).collect()
            })
    }
}

/// A choice in the completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message for this choice.
    pub message: ResponseMessage,

    /// Finish reason (stop, tool_calls, length, ...).
    pub finish_reason: Option<String>,
}

/// Message in a completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Text content of the response.
    pub content: Option<String>,

    /// Tool calls the model wants to make.
    pub tool_calls: Option<Vec<WireToolCall>>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    /// Total tokens used.
    pub total_tokens: u32,
}
