//! Application layer for medicore
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, ModelConfig};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    turn_progress::{NoTurnProgress, TurnProgressNotifier},
};
pub use use_cases::converse::{
    ConversationOrchestrator, ConversationSnapshot, ConversationState, OrchestrationError,
    RejectReason, SubmitOutcome,
};
pub use use_cases::generate_response::{GenerationOutcome, ResponseGenerator};
pub use use_cases::route_intent::IntentRouter;
