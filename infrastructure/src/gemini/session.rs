//! Chat session over the stateless `generateContent` API

use super::client::GeminiClient;
use super::types::{Content, GenerateContentRequest};
use async_trait::async_trait;
use medicore_application::ports::llm_gateway::{GatewayError, LlmSession};
use medicore_domain::util::preview;
use medicore_domain::{ChatMessage, Model};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// A Gemini chat session.
///
/// The API keeps no server-side state, so the session holds the history and
/// resends it with each message. A message and its reply are appended only
/// after a successful call.
pub struct GeminiSession {
    client: Arc<GeminiClient>,
    model: Model,
    system_instruction: Content,
    history: Mutex<Vec<Content>>,
}

impl GeminiSession {
    pub fn new(
        client: Arc<GeminiClient>,
        model: Model,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Self {
        Self {
            client,
            model,
            system_instruction: Content::system(system_prompt),
            history: Mutex::new(history.iter().map(Content::from).collect()),
        }
    }

    /// Number of messages currently in the history.
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let mut history = self.history.lock().await;

        let user = Content::user(content);
        let mut contents = history.clone();
        contents.push(user.clone());

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(self.system_instruction.clone()),
            generation_config: None,
        };

        debug!(model = %self.model, "Sending: {}", preview(content, 80));
        let response = self.client.generate_content(&self.model, &request).await?;
        let text = response.text();

        history.push(user);
        history.push(Content::model(text.clone()));
        Ok(text)
    }
}
