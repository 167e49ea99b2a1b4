//! Turn progress notification port
//!
//! Lets a front-end follow an in-flight turn: the status line changes while
//! the orchestrator routes and generates, and turns appear as they are
//! appended.

use medicore_domain::{AgentKind, ConversationTurn, OrchestrationStatus};

/// Callbacks during one user turn.
///
/// Implementations live in the presentation layer. All methods default to
/// no-ops so a front-end only overrides what it renders.
pub trait TurnProgressNotifier: Send + Sync {
    /// The user's turn was appended.
    fn on_user_turn(&self, _turn: &ConversationTurn) {}

    /// The status line changed.
    fn on_status(&self, _status: &OrchestrationStatus) {}

    /// The router settled on an agent.
    fn on_agent_selected(&self, _agent: AgentKind) {}

    /// The reply (or a fallback) was appended and the turn is over.
    fn on_agent_turn(&self, _turn: &ConversationTurn) {}
}

/// No-op notifier for when nothing is rendering progress
pub struct NoTurnProgress;

impl TurnProgressNotifier for NoTurnProgress {}
