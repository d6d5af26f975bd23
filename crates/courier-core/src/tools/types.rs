//! Tool-related type definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// A tool invocation received from the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,
    /// Name of the tool to call
    pub name: String,
    /// Arguments to pass to the tool
    pub arguments: HashMap<String, Value>,
}

impl ToolCall {
    /// Create a tool call from a JSON object; anything else yields no arguments
    pub fn from_json(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Get a typed argument value
    pub fn get_argument<T>(&self, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.arguments
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_argument::<String>(key)
    }
}

/// Result of a tool execution
///
/// Tools SHOULD use `ToolResult::success()` and `ToolResult::error()` rather
/// than constructing this struct by hand. `output` is the human-readable text
/// returned to the host; `metadata` carries structured extras for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool call ID this result corresponds to
    pub call_id: String,
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the tool execution was successful
    pub success: bool,
    /// Output from the tool (if successful)
    pub output: Option<String>,
    /// Error message (if failed)
    pub error: Option<String>,
    /// Stable error code (if failed)
    pub error_code: Option<String>,
    /// Execution time in milliseconds
    pub execution_time_ms: Option<u64>,
    /// Additional metadata
    pub metadata: HashMap<String, Value>,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            error_code: None,
            execution_time_ms: None,
            metadata: HashMap::new(),
        }
    }

    /// Create a failed tool result
    pub fn error(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error.into()),
            error_code: None,
            execution_time_ms: None,
            metadata: HashMap::new(),
        }
    }

    /// Create a failed result from a tool error, keeping its code
    pub fn from_error(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        err: &super::ToolError,
    ) -> Self {
        let mut result = Self::error(call_id, tool_name, err.to_string());
        result.error_code = Some(err.error_code().to_string());
        result
    }

    /// Add execution time
    pub fn with_execution_time(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = Some(time_ms);
        self
    }

    /// Add metadata
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Text shown to the host: the output on success, the message on failure
    pub fn text(&self) -> String {
        if self.success {
            self.output.clone().unwrap_or_default()
        } else {
            self.error.clone().unwrap_or_default()
        }
    }
}

/// Shape of a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    /// A single string
    String,
    /// An array of strings
    StringArray,
}

/// Parameter definition for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Parameter type
    pub param_type: ParameterType,
    /// Whether this parameter is required
    pub required: bool,
    /// Strings (or every array item) must be syntactically valid email addresses
    pub email: bool,
    /// Strings must not be empty
    pub non_empty: bool,
}

impl ToolParameter {
    fn build(name: String, description: String, param_type: ParameterType, required: bool) -> Self {
        Self {
            name,
            description,
            param_type,
            required,
            email: false,
            non_empty: false,
        }
    }

    /// Create a required string parameter
    pub fn string<S: Into<String>>(name: S, description: S) -> Self {
        Self::build(name.into(), description.into(), ParameterType::String, true)
    }

    /// Create an optional string parameter
    pub fn optional_string<S: Into<String>>(name: S, description: S) -> Self {
        Self::build(name.into(), description.into(), ParameterType::String, false)
    }

    /// Create an optional string array parameter
    pub fn string_array<S: Into<String>>(name: S, description: S) -> Self {
        Self::build(
            name.into(),
            description.into(),
            ParameterType::StringArray,
            false,
        )
    }

    /// Require email address syntax
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Reject empty strings
    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    /// JSON schema fragment for this parameter
    pub fn json_schema(&self) -> Value {
        let mut string_schema = Map::new();
        string_schema.insert("type".to_string(), "string".into());
        if self.email {
            string_schema.insert("format".to_string(), "email".into());
        }
        if self.non_empty {
            string_schema.insert("minLength".to_string(), 1.into());
        }

        let mut schema = match self.param_type {
            ParameterType::String => string_schema,
            ParameterType::StringArray => {
                let mut array_schema = Map::new();
                array_schema.insert("type".to_string(), "array".into());
                array_schema.insert("items".to_string(), Value::Object(string_schema));
                array_schema
            }
        };
        schema.insert("description".to_string(), self.description.clone().into());
        Value::Object(schema)
    }
}

/// Behavioral hints advertised to the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    /// Human-readable title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The tool does not modify its environment
    pub read_only_hint: bool,
    /// The tool may perform destructive updates
    pub destructive_hint: bool,
    /// Repeated calls with the same arguments have no additional effect
    pub idempotent_hint: bool,
}

impl ToolAnnotations {
    /// Annotations for a side-effect free query
    pub fn read_only(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            read_only_hint: true,
            destructive_hint: false,
            idempotent_hint: true,
        }
    }

    /// Annotations for a non-idempotent, non-destructive write
    pub fn write(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            read_only_hint: false,
            destructive_hint: false,
            idempotent_hint: false,
        }
    }
}

/// Contract for a tool: its name, description, accepted parameters and hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Accepted parameters, in declaration order
    pub parameters: Vec<ToolParameter>,
    /// Behavioral hints
    pub annotations: ToolAnnotations,
}

impl ToolSchema {
    /// Create a new tool schema
    pub fn new<S: Into<String>>(name: S, description: S, parameters: Vec<ToolParameter>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            annotations: ToolAnnotations::default(),
        }
    }

    /// Set annotations
    pub fn with_annotations(mut self, annotations: ToolAnnotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Look up a parameter by name
    pub fn field(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Names of all required parameters
    pub fn required_fields(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// JSON schema for the input object, as advertised to the host
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in &self.parameters {
            properties.insert(param.name.clone(), param.json_schema());
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_fields(),
            "additionalProperties": false
        })
    }
}
