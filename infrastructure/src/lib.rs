//! Infrastructure layer for agentic-gemini
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini gateway, the local tool
//! registry, configuration file loading and logging setup.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig,
    FileModelConfig, FileOutputConfig, FileReplConfig,
};
pub use gemini::{DEFAULT_API_BASE, GeminiConfig, GeminiGateway};
pub use logging::init_logging;
pub use tools::{ToolHandler, ToolRegistry};
