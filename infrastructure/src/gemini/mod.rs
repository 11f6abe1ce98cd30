//! Gemini adapter
//!
//! Implements [`LlmGateway`](agentic_application::LlmGateway) on top of the
//! Generative Language REST API (`models/{model}:generateContent`).

pub mod gateway;
pub mod types;

pub use gateway::{DEFAULT_API_BASE, GeminiConfig, GeminiGateway};
