//! Input/output types for the conversation orchestrator.

use medicore_domain::{AgentKind, ConversationTurn, OrchestrationStatus, TurnPhase};
use serde::Serialize;
use thiserror::Error;

/// Why a submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// A previous turn is still being processed.
    Busy,
    /// The text is empty or whitespace only.
    Blank,
}

/// Result of [`submit`](super::ConversationOrchestrator::submit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The turn ran to completion; carries the appended agent turn.
    Completed(ConversationTurn),
    /// Nothing was appended.
    Rejected(RejectReason),
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }

    /// The agent turn, if the submission was processed.
    pub fn agent_turn(&self) -> Option<&ConversationTurn> {
        match self {
            SubmitOutcome::Completed(turn) => Some(turn),
            SubmitOutcome::Rejected(_) => None,
        }
    }
}

/// Failures the router and generator don't absorb themselves.
#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error("Turn processing panicked: {0}")]
    Panicked(String),
}

/// Read-only view of a conversation for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSnapshot {
    pub turns: Vec<ConversationTurn>,
    pub active_agent: AgentKind,
    pub awaiting_response: bool,
    pub status: Option<OrchestrationStatus>,
    pub phase: TurnPhase,
}

impl ConversationSnapshot {
    /// Status line, or an empty string when idle.
    pub fn status_message(&self) -> String {
        self.status.map(|s| s.message()).unwrap_or_default()
    }
}
