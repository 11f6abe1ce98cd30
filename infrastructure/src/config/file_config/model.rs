//! Model configuration from TOML (`[model]` section)

use crate::gemini::DEFAULT_API_BASE;
use agentic_domain::Model;
use serde::{Deserialize, Serialize};

/// Raw model/provider configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Gemini model id (e.g. "gemini-2.5-pro")
    pub name: String,
    /// Generative Language API base URL
    pub api_base: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
        }
    }
}

impl FileModelConfig {
    pub fn model(&self) -> Model {
        let Ok(model) = self.name.parse::<Model>();
        model
    }
}
