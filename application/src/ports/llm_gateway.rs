//! LLM Gateway port
//!
//! Defines the interface for communicating with the language-model service
//! that both classifies intents and generates agent replies.

use async_trait::async_trait;
use medicore_domain::{ChatMessage, ClassificationRequest, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the
/// language-model service. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Run a constrained-output classification.
    ///
    /// Returns the raw text the service produced (expected to be a JSON
    /// object matching `request.schema`). Interpreting it is the caller's job.
    async fn classify(
        &self,
        model: &Model,
        request: &ClassificationRequest,
    ) -> Result<String, GatewayError>;

    /// Open a chat session conditioned on `system_prompt` with `history`
    /// already in place.
    async fn create_chat_session(
        &self,
        model: &Model,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM chat session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a user message and get the reply text.
    ///
    /// A reply with no text is `Ok(String::new())`, not an error.
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
