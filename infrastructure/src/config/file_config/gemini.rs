//! Gemini connection configuration from TOML (`[gemini]` section)

use crate::gemini::client::DEFAULT_BASE_URL;
use medicore_domain::Model;
use serde::{Deserialize, Serialize};

/// Environment variables consulted, in order, when `api_key` is unset.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// API key; falls back to the environment
    pub api_key: Option<String>,
    /// Model used by every agent
    pub model: String,
    /// Model used for intent classification
    pub routing_model: String,
    /// API base URL
    pub base_url: String,
    /// Timeout in seconds for API calls
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Model::default().to_string(),
            routing_model: Model::default().to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileGeminiConfig {
    pub fn agent_model(&self) -> Model {
        self.model.trim().parse().unwrap_or_default()
    }

    pub fn routing_model(&self) -> Model {
        self.routing_model.trim().parse().unwrap_or_default()
    }

    /// The configured key, else the first non-empty key from the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_api_key_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        self.api_key
            .clone()
            .into_iter()
            .chain(API_KEY_ENV_VARS.iter().filter_map(|name| lookup(name)))
            .find(|key| !key.trim().is_empty())
    }
}
