//! Tool definitions and calls exchanged with the model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool the model may call, with a JSON Schema for its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,

    /// What the tool does, shown to the model.
    pub description: String,

    /// JSON Schema describing the parameters.
    pub parameters: Value,
}

impl ToolDefinition {
    /// Create a tool definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// A concrete tool invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Call identifier, echoed back with the result.
    pub id: String,

    /// Name of the tool to run.
    pub name: String,

    /// Parsed arguments.
    pub arguments: Value,
}

impl ToolCall {
    /// Create a call with an explicit id.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Fetch a string argument by key.
    pub fn str_arg(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_arg() {
        let call = ToolCall::with_id("c1", "search_pages", json!({"cql": "type = page"}));
        assert_eq!(call.str_arg("cql"), Some("type = page"));
        assert_eq!(call.str_arg("missing"), None);
    }
}
