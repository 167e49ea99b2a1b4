//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types.

mod behavior;
mod gemini;
mod logging;
mod repl;

pub use behavior::FileBehaviorConfig;
pub use gemini::{API_KEY_ENV_VARS, FileGeminiConfig};
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;

use medicore_application::{BehaviorConfig, ModelConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors found while validating a loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gemini.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("{0} cannot be empty")]
    EmptyModelName(&'static str),

    #[error("behavior.routing_window must be greater than 0")]
    InvalidRoutingWindow,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini connection and model selection
    pub gemini: FileGeminiConfig,
    /// Turn pacing and routing settings
    pub behavior: FileBehaviorConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = self.gemini.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.gemini.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName("gemini.model"));
        }
        if self.gemini.routing_model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName("gemini.routing_model"));
        }

        if self.behavior.routing_window == 0 {
            return Err(ConfigValidationError::InvalidRoutingWindow);
        }

        Ok(())
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::default()
            .with_routing(self.gemini.routing_model())
            .with_agents(self.gemini.agent_model())
    }

    pub fn behavior_config(&self) -> BehaviorConfig {
        self.behavior.to_behavior_config()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.gemini.timeout_seconds.map(Duration::from_secs)
    }
}
