//! Configuration file loading for agentic-gemini
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed with `AGENTIC_` (`AGENTIC_MODEL__NAME`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./agentic.toml` or `./.agentic.toml`
//! 4. Global: `~/.config/agentic-gemini/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileModelConfig, FileOutputConfig,
    FileReplConfig,
};
pub use loader::{ConfigError, ConfigLoader};
