//! Gemini LLM Gateway - implements LlmGateway for the Generative Language API

use super::types::{Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use agentic_application::ports::llm_gateway::{GatewayError, LlmGateway};
use agentic_domain::Model;
use async_trait::async_trait;
use tracing::{debug, info};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base URL, without trailing slash
    pub api_base: String,
    /// Model used for every completion
    pub model: Model,
    /// API key; `None` surfaces as an authentication error on first use
    pub api_key: Option<String>,
}

impl GeminiConfig {
    pub fn new(model: Model) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model,
            api_key: None,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Read the API key from the environment variable `key_env`
    pub fn with_api_key_from_env(self, key_env: &str) -> Self {
        let key = std::env::var(key_env).ok();
        if key.is_none() {
            debug!(key_env, "API key variable not set");
        }
        self.with_api_key(key)
    }

    /// Full URL of the `generateContent` endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_base,
            self.model.resource_name()
        )
    }
}

/// Gateway to the Gemini API.
///
/// The HTTP client is created once and reused for every turn.
pub struct GeminiGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Self {
        info!(model = %config.model, endpoint = %config.endpoint(), "Gemini gateway ready");
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    fn model(&self) -> &Model {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            GatewayError::Authentication("no API key configured".to_string())
        })?;

        let body = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
        };

        debug!(model = %self.config.model, "Sending generateContent request");
        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        if !status.is_success() {
            return Err(map_error_status(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        extract_text(&parsed)
    }
}

/// Map a non-success HTTP status and body to a [`GatewayError`]
pub(crate) fn map_error_status(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.describe())
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        // Invalid keys are reported as 400 INVALID_ARGUMENT
        400 if message.contains("API key") => GatewayError::Authentication(message),
        401 | 403 => GatewayError::Authentication(message),
        429 => GatewayError::QuotaExceeded(message),
        400..=499 => GatewayError::InvalidRequest(message),
        _ => GatewayError::Service { status, message },
    }
}

/// Trimmed text of the first candidate
pub(crate) fn extract_text(response: &GenerateContentResponse) -> Result<String, GatewayError> {
    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
            .map(|r| format!("prompt blocked ({})", r))
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(GatewayError::EmptyResponse(reason));
    };

    let text = candidate
        .content
        .as_ref()
        .map(|c| c.text())
        .unwrap_or_default();
    let text = text.trim();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .clone()
            .unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(GatewayError::EmptyResponse(format!(
            "candidate has no text (finish reason: {})",
            reason
        )));
    }

    Ok(text.to_string())
}
