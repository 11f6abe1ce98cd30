//! Tool Executor port
//!
//! Defines the interface for looking up and invoking registered tools.

use agentic_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// Tools are pure, fast functions, so execution is synchronous.
/// Implementations (adapters) live in the infrastructure layer.
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().contains(name)
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Get names of all available tools
    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    /// Registered `(name, description)` pairs, ordered by name
    fn list(&self) -> Vec<(&str, &str)> {
        self.tool_spec()
            .all()
            .map(|t| (t.name.as_str(), t.description.as_str()))
            .collect()
    }

    /// Invoke a tool with the call's positional arguments
    fn execute(&self, call: &ToolCall) -> ToolResult;
}
