//! Tool domain module
//!
//! Tools are small local functions the model may ask for by replying with
//! `TOOL_CALL: name(args...)`.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │    │ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (parsed)     │    │ (output)     │
//! └──────────────┘    └──────▲───────┘    └──────────────┘
//!                            │
//!                  call_parser + literal
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`]: definitions of the registered tools
//! - [`ToolDefinition`]: name, description and positional parameters
//! - [`ToolCall`]: tool name plus parsed [`LiteralValue`] arguments
//! - [`ToolResult`] / [`ToolError`]: outcome of an invocation
//!
//! The callables themselves live in the infrastructure layer; this module
//! stays free of I/O.

pub mod call_parser;
pub mod entities;
pub mod literal;
pub mod value_objects;

pub use call_parser::{CallParseError, ModelReply, classify_reply};
pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use literal::{LiteralError, LiteralValue, parse_literal_list};
pub use value_objects::{ToolError, ToolResult};
