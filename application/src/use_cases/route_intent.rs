//! Route Intent use case.
//!
//! Decides which agent handles a user utterance. The classifier is asked
//! for a single constrained field; whatever goes wrong (call failure,
//! unparseable output, unknown identifier) the answer is the orchestrator.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use medicore_domain::util::preview;
use medicore_domain::{
    AgentKind, DEFAULT_ROUTING_WINDOW, Model, RoutingEntry, build_classification_request,
    parse_routing_output,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Classifies utterances into an [`AgentKind`].
///
/// Never fails and never retries: the orchestrator fallback is the recovery.
#[derive(Clone)]
pub struct IntentRouter {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    window: usize,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl IntentRouter {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model) -> Self {
        Self {
            gateway,
            model,
            window: DEFAULT_ROUTING_WINDOW,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Number of most recent history entries the classifier sees.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Pick the agent for `utterance`.
    ///
    /// `recent_history` is the conversation before the utterance; only the
    /// last [`window`](Self::window) entries are sent to the classifier.
    pub async fn route(&self, utterance: &str, recent_history: &[RoutingEntry]) -> AgentKind {
        let request = build_classification_request(utterance, recent_history, self.window);

        debug!(
            model = %self.model,
            history = recent_history.len().min(self.window),
            "Classifying: {}",
            preview(utterance, 80)
        );

        let (decision, fallback_reason) = match self.gateway.classify(&self.model, &request).await
        {
            Ok(raw) => match parse_routing_output(&raw) {
                Ok(agent) => (agent, None),
                Err(e) => {
                    warn!("Routing output rejected, using orchestrator: {}", e);
                    (AgentKind::Orchestrator, Some(e.to_string()))
                }
            },
            Err(e) => {
                warn!("Routing error, using orchestrator: {}", e);
                (AgentKind::Orchestrator, Some(e.to_string()))
            }
        };

        info!(agent = %decision, "Routed request");

        self.conversation_logger.log(ConversationEvent::new(
            "routing_decision",
            serde_json::json!({
                "model": self.model.to_string(),
                "agent": decision.as_str(),
                "fallback": fallback_reason,
            }),
        ));

        decision
    }
}
