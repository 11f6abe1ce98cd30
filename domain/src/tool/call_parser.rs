//! Tool-call classification of model replies.
//!
//! The model asks for a tool by replying with a single line:
//!
//! ```text
//! TOOL_CALL: get_weather("Paris")
//! ```
//!
//! Anything that does not start with the marker is a plain answer and is
//! shown to the user unchanged. A missing closing parenthesis is tolerated
//! (`TOOL_CALL: add_numbers(1, 2` parses like the complete form).

use super::entities::ToolCall;
use super::literal::{LiteralError, parse_literal_list};
use thiserror::Error;

/// Marker that opens a tool call
pub const TOOL_CALL_MARKER: &str = "TOOL_CALL:";

/// Classified model reply
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    /// Plain text to display as-is
    Plain(String),
    /// A request to invoke a tool
    ToolCall(ToolCall),
}

/// Errors raised while parsing a `TOOL_CALL:` line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallParseError {
    #[error("tool call has no opening parenthesis: {0}")]
    MissingParenthesis(String),

    #[error("tool call has no tool name")]
    MissingToolName,

    #[error("invalid tool arguments: {0}")]
    InvalidArguments(#[from] LiteralError),
}

/// Classify a model reply as plain text or a tool call.
pub fn classify_reply(text: &str) -> Result<ModelReply, CallParseError> {
    let trimmed = text.trim_start();
    match trimmed.strip_prefix(TOOL_CALL_MARKER) {
        Some(call_line) => parse_tool_call(call_line).map(ModelReply::ToolCall),
        None => Ok(ModelReply::Plain(text.to_string())),
    }
}

/// Parse the part after the marker: `name(<literal-arg-list>)`.
pub fn parse_tool_call(call_line: &str) -> Result<ToolCall, CallParseError> {
    let call_line = call_line.trim();
    let (name, args_str) = call_line
        .split_once('(')
        .ok_or_else(|| CallParseError::MissingParenthesis(call_line.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CallParseError::MissingToolName);
    }

    let args_str = args_str.trim_end();
    let args_str = args_str.strip_suffix(')').unwrap_or(args_str).trim();
    let args = parse_literal_list(args_str)?;

    tracing::debug!(tool = name, arg_count = args.len(), "Parsed tool call");

    Ok(ToolCall::new(name).with_args(args))
}
