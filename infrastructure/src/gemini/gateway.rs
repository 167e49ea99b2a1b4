//! Gemini LLM Gateway implementation

use super::client::{GeminiClient, GeminiSettings};
use super::error::GeminiError;
use super::session::GeminiSession;
use super::types::{Content, GenerateContentRequest, GenerationConfig};
use async_trait::async_trait;
use medicore_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use medicore_domain::{ChatMessage, ClassificationRequest, Model};
use std::sync::Arc;
use tracing::{debug, info};

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiLlmGateway {
    client: Arc<GeminiClient>,
}

impl GeminiLlmGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self, GeminiError> {
        let client = GeminiClient::new(settings)?;
        info!("GeminiLlmGateway initialized");
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Create a gateway with an existing client
    pub fn with_client(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }

    /// Build the constrained-output request for a classification.
    pub fn classification_body(request: &ClassificationRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(request.prompt.clone())],
            system_instruction: Some(Content::system(request.system_instruction.clone())),
            generation_config: Some(GenerationConfig::json(request.schema.to_json_schema())),
        }
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn classify(
        &self,
        model: &Model,
        request: &ClassificationRequest,
    ) -> Result<String, GatewayError> {
        let body = Self::classification_body(request);
        let response = self.client.generate_content(model, &body).await?;
        let text = response.text();
        debug!(model = %model, "Classification output: {}", text);
        Ok(text)
    }

    async fn create_chat_session(
        &self,
        model: &Model,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(GeminiSession::new(
            Arc::clone(&self.client),
            model.clone(),
            system_prompt,
            history,
        )))
    }
}
