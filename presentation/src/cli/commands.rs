//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for agentic-gemini
#[derive(Parser, Debug)]
#[command(name = "agentic-gemini")]
#[command(author, version, about = "Chat with Gemini and let it call local tools")]
#[command(long_about = r#"
Agentic Gemini is an interactive chat agent. Every line you type is sent to
Gemini together with a list of local tools. When the model answers with

  TOOL_CALL: tool_name("arg1", "arg2")

the named tool runs locally and its result is printed.

Shell commands: help (list tools), exit or quit (stop).

The API key is read from GOOGLE_API_KEY (or a local .env file).

Configuration files are loaded from (in priority order):
1. AGENTIC_* environment variables (e.g. AGENTIC_MODEL__NAME)
2. --config <path>     Explicit config file
3. ./agentic.toml      Project-level config
4. ~/.config/agentic-gemini/config.toml   Global config

Example:
  agentic-gemini
  agentic-gemini -m gemini-2.5-flash -v
"#)]
pub struct Cli {
    /// Model to chat with (overrides the configured model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
