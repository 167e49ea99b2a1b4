//! Domain layer for MediCore
//!
//! This crate contains the agents, conversation entities and routing rules.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Agents
//!
//! A closed set of [`AgentKind`]s, each with one `'static` [`AgentProfile`]
//! in the registry. [`AgentKind::Orchestrator`] is the default and handles
//! anything the router can't place.
//!
//! ## Conversation
//!
//! A [`ConversationLog`] is an append-only sequence of [`ConversationTurn`]s,
//! seeded with the orchestrator's welcome.
//!
//! ## Routing
//!
//! The classifier sees a bounded window of [`RoutingEntry`]s and must answer
//! with one agent identifier; anything else means "orchestrator".

pub mod agent;
pub mod conversation;
pub mod core;
pub mod orchestration;
pub mod routing;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use agent::{
    kind::AgentKind,
    profile::{Accent, AgentProfile, PresentationHints},
    registry::{all_profiles, lookup},
};
pub use conversation::{
    entities::{ConversationTurn, Speaker, TurnId},
    log::ConversationLog,
    messages::{
        EMPTY_RESPONSE_FALLBACK, GENERATION_FAILURE_FALLBACK, SYSTEM_ERROR_MESSAGE,
        WELCOME_MESSAGE,
    },
};
pub use self::core::{error::DomainError, model::Model};
pub use orchestration::status::{OrchestrationStatus, TurnPhase};
pub use routing::{
    parsing::parse_routing_output,
    prompt::{DEFAULT_ROUTING_WINDOW, TARGET_AGENT_FIELD, build_classification_request},
    value_objects::{ChoiceSchema, ClassificationRequest, RoutingEntry},
};
pub use session::entities::{ChatMessage, ChatRole};
