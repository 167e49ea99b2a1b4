//! Generate Response use case.
//!
//! Produces an agent's reply. Each call opens a fresh chat session whose
//! system instruction is the agent's directive and whose history is the
//! whole conversation before the utterance; the utterance itself goes out
//! as the live message.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use medicore_domain::util::preview;
use medicore_domain::{
    AgentKind, ChatMessage, EMPTY_RESPONSE_FALLBACK, GENERATION_FAILURE_FALLBACK, Model,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// How a generation attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The model produced text.
    Generated,
    /// The call succeeded without usable text.
    Empty,
    /// The call failed.
    Failed,
}

impl GenerationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationOutcome::Generated => "generated",
            GenerationOutcome::Empty => "empty",
            GenerationOutcome::Failed => "failed",
        }
    }
}

/// Generates agent replies conditioned on the agent's directive.
#[derive(Clone)]
pub struct ResponseGenerator {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ResponseGenerator {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model) -> Self {
        Self {
            gateway,
            model,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Generate `agent`'s reply to `utterance`.
    ///
    /// `prior_turns` must not include `utterance`. Always returns displayable
    /// text: the reply, or one of the two fixed fallbacks.
    pub async fn generate(
        &self,
        agent: AgentKind,
        utterance: &str,
        prior_turns: &[ChatMessage],
    ) -> String {
        self.generate_with_outcome(agent, utterance, prior_turns)
            .await
            .0
    }

    /// Like [`generate`](Self::generate), also reporting which path was taken.
    pub async fn generate_with_outcome(
        &self,
        agent: AgentKind,
        utterance: &str,
        prior_turns: &[ChatMessage],
    ) -> (String, GenerationOutcome) {
        let profile = agent.profile();

        debug!(
            agent = %agent,
            model = %self.model,
            history = prior_turns.len(),
            "Generating reply for: {}",
            preview(utterance, 80)
        );

        let (text, outcome) = match self.request(profile.directive, utterance, prior_turns).await {
            Ok(text) if !text.trim().is_empty() => {
                (text.trim().to_string(), GenerationOutcome::Generated)
            }
            Ok(_) => {
                warn!(agent = %agent, "{} returned no text", profile.name);
                (EMPTY_RESPONSE_FALLBACK.to_string(), GenerationOutcome::Empty)
            }
            Err(e) => {
                error!(agent = %agent, "Generation error for {}: {}", profile.name, e);
                (GENERATION_FAILURE_FALLBACK.to_string(), GenerationOutcome::Failed)
            }
        };

        info!(agent = %agent, outcome = outcome.as_str(), bytes = text.len(), "Reply ready");

        self.conversation_logger.log(ConversationEvent::new(
            "agent_response",
            serde_json::json!({
                "model": self.model.to_string(),
                "agent": agent.as_str(),
                "outcome": outcome.as_str(),
                "bytes": text.len(),
            }),
        ));

        (text, outcome)
    }

    async fn request(
        &self,
        directive: &str,
        utterance: &str,
        prior_turns: &[ChatMessage],
    ) -> Result<String, GatewayError> {
        let session = self
            .gateway
            .create_chat_session(&self.model, directive, prior_turns)
            .await?;
        session.send(utterance).await
    }
}
