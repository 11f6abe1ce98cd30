//! Prompt template for the tool-using agent

use crate::tool::call_parser::TOOL_CALL_MARKER;
use crate::tool::entities::ToolSpec;

/// Templates for generating agent prompts
pub struct AgentPromptTemplate;

impl AgentPromptTemplate {
    /// One line per tool: `name: description`
    pub fn tool_descriptions(tool_spec: &ToolSpec) -> String {
        tool_spec
            .all()
            .map(|t| format!("{}: {}", t.name, t.description))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// System instructions, including the rendered tool list
    pub fn agent_system(tool_spec: &ToolSpec) -> String {
        format!(
            r#"You are a smart assistant with tool-using capability.
You can call a tool like this:
{TOOL_CALL_MARKER} tool_name("arg1", "arg2")
Available tools:
{}
Only call a tool if necessary. Otherwise, respond naturally.
"#,
            Self::tool_descriptions(tool_spec)
        )
    }

    /// Full prompt for one turn: system instructions followed by `USER: <input>`
    pub fn compose(tool_spec: &ToolSpec, user_input: &str) -> String {
        format!("{}\nUSER: {}", Self::agent_system(tool_spec), user_input)
    }
}
