//! Infrastructure layer for medicore
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FileReplConfig,
};
pub use gemini::{
    client::{DEFAULT_BASE_URL, GeminiClient, GeminiSettings},
    error::{GeminiError, Result},
    gateway::GeminiLlmGateway,
    session::GeminiSession,
};
pub use logging::JsonlConversationLogger;
