//! Tool domain entities

use super::literal::LiteralValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Definition of a tool that can be called by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "get_weather")
    pub name: String,
    /// Human-readable description, shown in `help` and in the system prompt
    pub description: String,
    /// Positional parameters, in call order
    pub parameters: Vec<ToolParameter>,
}

/// Positional parameter of a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Number of positional arguments the tool expects
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Signature as shown to the model, e.g. `add_numbers(a, b)`
    pub fn signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.name, params)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Specification of the tools available to the agent
///
/// Iteration order is by tool name, so prompts and `help` output are stable.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: BTreeMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool (builder pattern)
    ///
    /// A tool registered under an existing name replaces the earlier one.
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.insert(tool);
        self
    }

    /// Register a tool in place, returning the definition it replaced
    pub fn insert(&mut self, tool: ToolDefinition) -> Option<ToolDefinition> {
        let replaced = self.tools.insert(tool.name.clone(), tool);
        if let Some(previous) = &replaced {
            tracing::warn!(tool = %previous.name, "Tool registered twice, keeping the latest definition");
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool, as extracted from a model reply
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Positional arguments, in order
    pub args: Vec<LiteralValue>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, value: impl Into<LiteralValue>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn with_args(mut self, args: Vec<LiteralValue>) -> Self {
        self.args = args;
        self
    }
}

/// Renders the call as written by the model, e.g. `get_weather('Paris')`
impl std::fmt::Display for ToolCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args = self
            .args
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({})", self.tool_name, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("add_numbers", "Adds two numbers.")
            .with_parameter(ToolParameter::new("a", "First operand"))
            .with_parameter(ToolParameter::new("b", "Second operand"));

        assert_eq!(tool.name, "add_numbers");
        assert_eq!(tool.arity(), 2);
        assert_eq!(tool.signature(), "add_numbers(a, b)");
    }

    #[test]
    fn test_tool_spec() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("get_weather", "Weather"))
            .register(ToolDefinition::new("add_numbers", "Sum"));

        assert!(spec.get("get_weather").is_some());
        assert!(spec.contains("add_numbers"));
        assert!(spec.get("unknown").is_none());
        assert_eq!(spec.len(), 2);
        // Sorted by name
        assert_eq!(
            spec.names().collect::<Vec<_>>(),
            vec!["add_numbers", "get_weather"]
        );
    }

    #[test]
    fn test_later_registration_wins() {
        let mut spec = ToolSpec::new().register(ToolDefinition::new("echo", "first"));
        let replaced = spec.insert(ToolDefinition::new("echo", "second"));

        assert_eq!(replaced.unwrap().description, "first");
        assert_eq!(spec.get("echo").unwrap().description, "second");
        assert_eq!(spec.len(), 1);
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("get_weather").with_arg("Paris");

        assert_eq!(call.tool_name, "get_weather");
        assert_eq!(call.args, vec![LiteralValue::Str("Paris".to_string())]);
        assert_eq!(call.to_string(), "get_weather('Paris')");
        assert_eq!(
            ToolCall::new("add_numbers").with_arg(1i64).with_arg(2.5).to_string(),
            "add_numbers(1, 2.5)"
        );
    }
}
