//! Tool Registry
//!
//! The [`ToolRegistry`] maps tool names to their definition and handler and
//! implements [`ToolExecutorPort`]. It is built once at startup and only
//! read afterwards.
//!
//! # Usage
//!
//! ```ignore
//! use agentic_infrastructure::tools::ToolRegistry;
//!
//! let registry = ToolRegistry::with_builtin_tools();
//! assert!(registry.has_tool("get_weather"));
//!
//! let call = ToolCall::new("add_numbers").with_arg("2").with_arg("3");
//! assert_eq!(registry.execute(&call).output(), Some("5.0"));
//! ```
//!
//! # Arguments
//!
//! Handlers receive their arguments as text. Strings pass through, numbers
//! and booleans are rendered in literal form (`2`, `2.5`, `True`). `None`,
//! lists and tuples are rejected before the handler runs.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use agentic_application::ports::tool_executor::ToolExecutorPort;
use agentic_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::{ToolError, ToolResult},
};

use super::{math, weather};

/// Callable behind a registered tool
pub type ToolHandler = Arc<dyn Fn(&[String]) -> Result<String, ToolError> + Send + Sync>;

/// Tool registry: name -> (definition, handler)
pub struct ToolRegistry {
    tool_spec: ToolSpec,
    handlers: HashMap<String, ToolHandler>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tool_spec: ToolSpec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Registry with the builtin tools (`get_weather`, `add_numbers`)
    pub fn with_builtin_tools() -> Self {
        Self::new()
            .register(
                weather::get_weather_definition(),
                weather::execute_get_weather,
            )
            .register(math::add_numbers_definition(), math::execute_add_numbers)
    }

    /// Register a tool. A later registration under the same name replaces
    /// the earlier one.
    pub fn register<F>(mut self, definition: ToolDefinition, handler: F) -> Self
    where
        F: Fn(&[String]) -> Result<String, ToolError> + Send + Sync + 'static,
    {
        tracing::debug!(tool = %definition.name, "Registered tool");
        self.handlers
            .insert(definition.name.clone(), Arc::new(handler));
        self.tool_spec.insert(definition);
        self
    }

    fn scalar_args(call: &ToolCall) -> Result<Vec<String>, ToolError> {
        call.args
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.as_scalar_text().ok_or_else(|| {
                    ToolError::invalid_argument(format!(
                        "argument {} of {}() must be a string, number or boolean, got {}",
                        index + 1,
                        call.tool_name,
                        value.type_name()
                    ))
                })
            })
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(handler) = self.handlers.get(&call.tool_name) else {
            return ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name));
        };

        if let Some(definition) = self.get_tool(&call.tool_name)
            && definition.arity() != call.args.len()
        {
            let error = ToolError::arity_mismatch(definition, call.args.len());
            return ToolResult::failure(&call.tool_name, error);
        }

        let args = match Self::scalar_args(call) {
            Ok(args) => args,
            Err(e) => return ToolResult::failure(&call.tool_name, e),
        };

        let start = Instant::now();
        let result = handler(&args);
        tracing::debug!(
            tool = %call.tool_name,
            duration_us = start.elapsed().as_micros() as u64,
            success = result.is_ok(),
            "Tool executed"
        );

        match result {
            Ok(output) => ToolResult::success(&call.tool_name, output),
            Err(e) => ToolResult::failure(&call.tool_name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentic_domain::tool::literal::LiteralValue;
    use agentic_domain::tool::{classify_reply, ModelReply};

    fn parsed(reply: &str) -> ToolCall {
        match classify_reply(reply).unwrap() {
            ModelReply::ToolCall(call) => call,
            other => panic!("expected a tool call, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_tools() {
        let registry = ToolRegistry::with_builtin_tools();

        assert!(registry.has_tool("get_weather"));
        assert!(registry.has_tool("add_numbers"));
        assert!(!registry.has_tool("nonexistent_tool"));
        assert_eq!(
            registry.list(),
            vec![
                ("add_numbers", "Adds two numbers."),
                ("get_weather", "Returns the current weather in a city."),
            ]
        );
    }

    #[test]
    fn test_add_numbers_from_reply() {
        let registry = ToolRegistry::with_builtin_tools();
        let result = registry.execute(&parsed(r#"TOOL_CALL: add_numbers("2", "3")"#));
        assert_eq!(result.output(), Some("5.0"));
    }

    #[test]
    fn test_get_weather_from_reply() {
        let registry = ToolRegistry::with_builtin_tools();
        let result = registry.execute(&parsed(r#"TOOL_CALL: get_weather("Paris")"#));
        assert_eq!(
            result.output(),
            Some("The weather in Paris is sunny with 30°C.")
        );
    }

    #[test]
    fn test_numeric_literals_are_accepted() {
        let registry = ToolRegistry::with_builtin_tools();
        let result = registry.execute(&parsed("TOOL_CALL: add_numbers(1, 2.5"));
        assert_eq!(result.output(), Some("3.5"));
    }

    #[test]
    fn test_large_integers_are_passed_exactly() {
        let registry = ToolRegistry::with_builtin_tools();

        let result = registry.execute(&parsed("TOOL_CALL: get_weather(12345678901234567890)"));
        assert_eq!(
            result.output(),
            Some("The weather in 12345678901234567890 is sunny with 30°C.")
        );

        let result = registry.execute(&parsed("TOOL_CALL: get_weather(-9223372036854775808)"));
        assert_eq!(
            result.output(),
            Some("The weather in -9223372036854775808 is sunny with 30°C.")
        );
    }

    #[test]
    fn test_non_numeric_argument_fails() {
        let registry = ToolRegistry::with_builtin_tools();
        let result = registry.execute(&parsed(r#"TOOL_CALL: add_numbers("x", "1")"#));
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, ToolError::INVALID_ARGUMENT);
    }

    #[test]
    fn test_arity_mismatch_fails() {
        let registry = ToolRegistry::with_builtin_tools();
        let result = registry.execute(&parsed(r#"TOOL_CALL: get_weather("Paris", "Lyon")"#));
        assert_eq!(
            result.error().unwrap().message,
            "get_weather(city) takes 1 argument but 2 were given"
        );
    }

    #[test]
    fn test_sequence_argument_is_rejected() {
        let registry = ToolRegistry::with_builtin_tools();
        let call = ToolCall::new("get_weather").with_arg(LiteralValue::List(vec![]));
        let error = registry.execute(&call).error().cloned().unwrap();
        assert!(error.message.contains("got list"));
    }

    #[test]
    fn test_unknown_tool() {
        let registry = ToolRegistry::with_builtin_tools();
        let result = registry.execute(&ToolCall::new("nonexistent_tool"));
        assert!(result.error().unwrap().is_not_found());
    }

    #[test]
    fn test_later_registration_wins() {
        let registry = ToolRegistry::new()
            .register(ToolDefinition::new("greet", "first"), |_| Ok("one".to_string()))
            .register(ToolDefinition::new("greet", "second"), |_| Ok("two".to_string()));

        assert_eq!(registry.list(), vec![("greet", "second")]);
        assert_eq!(
            registry.execute(&ToolCall::new("greet")).output(),
            Some("two")
        );
    }
}
