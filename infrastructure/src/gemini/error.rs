//! Error types for the Gemini adapter

use medicore_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Missing API key (set gemini.api_key, GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Transport(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            GeminiError::Transport(e) => GatewayError::RequestFailed(e.to_string()),
            GeminiError::Api { status: 404, body } => GatewayError::ModelNotAvailable(body),
            e @ GeminiError::Api { .. } => GatewayError::RequestFailed(e.to_string()),
            e @ GeminiError::ParseError { .. } => GatewayError::InvalidResponse(e.to_string()),
            e @ (GeminiError::MissingApiKey | GeminiError::ClientBuild(_)) => {
                GatewayError::Other(e.to_string())
            }
        }
    }
}
