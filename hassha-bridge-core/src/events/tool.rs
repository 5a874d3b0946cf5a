use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of the host's `tool.execute.before` hook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolExecuteBeforePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Tool name (e.g. "bash", "edit", "read", "write")
    pub tool: String,

    /// Tool-specific arguments as a JSON value
    #[serde(default)]
    pub args: Value,
}

/// Payload of the host's `tool.execute.after` hook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolExecuteAfterPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Tool name (e.g. "bash", "edit", "read", "write")
    pub tool: String,

    /// Tool-specific arguments as a JSON value
    #[serde(default)]
    pub args: Value,

    /// Result value produced by the tool, if the host captured one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
}

impl ToolExecuteAfterPayload {
    /// A tool result is a failure iff it is an object carrying an `error` or
    /// `isError` indicator. Anything else, including a missing result, counts
    /// as success.
    pub fn is_failure(&self) -> bool {
        match &self.output {
            Some(Value::Object(map)) => map.contains_key("error") || map.contains_key("isError"),
            _ => false,
        }
    }
}
