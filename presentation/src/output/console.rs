//! Console output formatter for the chat shell

use agentic_application::{TurnError, TurnOutcome};
use colored::Colorize;

/// Formats shell messages and turn results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for every formatted string
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Banner printed when the shell starts
    pub fn welcome(model: &str, tools: &[&str]) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "=== Agentic Gemini AI ===".cyan().bold()));
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model));
        output.push_str(&format!("{} {}\n", "Tools:".cyan().bold(), tools.join(", ")));
        output.push_str("Type 'help' to list tools. Type 'exit' or 'quit' to stop.\n");
        output
    }

    /// Tool listing for the `help` command, from `(name, description)` pairs
    pub fn help(tools: &[(&str, &str)]) -> String {
        let mut output = format!("\n{}\n", "Available Tools:".cyan().bold());
        for (name, description) in tools {
            output.push_str(&format!(" - {}: {}\n", name, description));
        }
        output
    }

    /// Result of a successful turn
    pub fn outcome(outcome: &TurnOutcome) -> String {
        match outcome {
            TurnOutcome::ToolOutput { output, .. } => {
                format!("{} {}", "[Tool Result]".green().bold(), output)
            }
            TurnOutcome::Response(text) => {
                format!("{} {}", "[Agent Response]".blue().bold(), text)
            }
        }
    }

    /// A failed turn
    pub fn error(error: &TurnError) -> String {
        format!("{} {}", "[Error]".red().bold(), error)
    }

    /// Message printed when the shell stops
    pub fn farewell() -> String {
        format!("{} Goodbye", "Agent:".cyan().bold())
    }
}
