//! LLM Gateway port
//!
//! Defines the interface for requesting completions from the hosted model.

use agentic_domain::Model;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a completion request
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response: {0}")]
    EmptyResponse(String),
}

/// Gateway for LLM completions
///
/// One call per turn: the composed prompt goes in, the trimmed text of the
/// top candidate comes out. Implementations (adapters) live in the
/// infrastructure layer and must not retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model this gateway sends requests to
    fn model(&self) -> &Model;

    /// Send a prompt and return the trimmed completion text
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}
