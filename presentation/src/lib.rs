//! Presentation layer for agentic-gemini
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive chat shell.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, LoopControl, ShellCommand};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
