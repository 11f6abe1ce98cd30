//! Domain layer for agentic-gemini
//!
//! This crate contains the core logic of the agent: tool definitions,
//! the `TOOL_CALL:` reply convention and the prompt template.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Turn Flow
//!
//! ```text
//! user input ──▶ AgentPromptTemplate::compose ──▶ model reply
//!                                                    │
//!                               classify_reply ◀─────┘
//!                                 │          │
//!                       ModelReply::Plain  ModelReply::ToolCall
//! ```

pub mod core;
pub mod prompt;
pub mod tool;

// Re-export commonly used types
pub use core::model::Model;
pub use prompt::AgentPromptTemplate;
pub use tool::{
    call_parser::{CallParseError, ModelReply, TOOL_CALL_MARKER, classify_reply},
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    literal::{LiteralError, LiteralValue, parse_literal_list},
    value_objects::{ToolError, ToolResult},
};
