//! Tool trait definition and types.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ToolError;

/// Arguments passed to a tool, as decoded from a model's tool call.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    pub params: Map<String, Value>,
}

impl ToolArgs {
    pub fn new(params: Map<String, Value>) -> Self {
        Self { params }
    }

    /// Accepts a JSON object or `null` (no arguments).
    pub fn from_value(value: Value) -> Result<Self, ToolError> {
        match value {
            Value::Object(params) => Ok(Self::new(params)),
            Value::Null => Ok(Self::default()),
            other => Err(ToolError::invalid(
                "arguments",
                format!("expected a JSON object, found {other}"),
            )),
        }
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ToolError::invalid(key, "expected string"))
    }

    /// Decode an optional parameter; absent and `null` both yield `None`.
    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ToolError> {
        match self.params.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| ToolError::invalid(key, e.to_string())),
        }
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// JSON-serialized result.
    pub content: String,
    pub success: bool,
}

impl ToolOutput {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Serialize `value` as the tool result.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ToolError> {
        Ok(Self::success(serde_json::to_string(value)?))
    }
}

/// Name, description and input schema advertised to the language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema of the arguments object.
    pub input_schema: Value,
}

/// A capability the agent can invoke by name.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn input_schema(&self) -> Value;

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            input_schema: self.input_schema(),
        }
    }
}
