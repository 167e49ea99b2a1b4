//! Per-turn orchestration status.

use crate::agent::kind::AgentKind;
use serde::{Deserialize, Serialize};

/// Where an in-flight user turn currently is.
///
/// ```text
/// Idle -> Routing -> HandingOff -> Generating -> Idle
/// ```
///
/// Failures at any step also return to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    Idle,
    Routing,
    HandingOff,
    Generating,
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::Idle => "idle",
            TurnPhase::Routing => "routing",
            TurnPhase::HandingOff => "handing_off",
            TurnPhase::Generating => "generating",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TurnPhase::Idle)
    }
}

/// Human-facing description of the in-flight step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "agent", rename_all = "snake_case")]
pub enum OrchestrationStatus {
    /// The router is classifying the request.
    Analyzing,
    /// The router picked a specialist.
    RoutedTo(AgentKind),
    /// The router fell back to the orchestrator.
    Clarifying,
    /// The chosen agent is producing its reply.
    Generating,
}

impl OrchestrationStatus {
    /// Status that confirms a routing decision.
    pub fn for_decision(agent: AgentKind) -> Self {
        if agent.is_orchestrator() {
            OrchestrationStatus::Clarifying
        } else {
            OrchestrationStatus::RoutedTo(agent)
        }
    }

    /// Phase this status belongs to.
    pub fn phase(&self) -> TurnPhase {
        match self {
            OrchestrationStatus::Analyzing => TurnPhase::Routing,
            OrchestrationStatus::RoutedTo(_) | OrchestrationStatus::Clarifying => {
                TurnPhase::HandingOff
            }
            OrchestrationStatus::Generating => TurnPhase::Generating,
        }
    }

    /// Status line shown by the front-end.
    pub fn message(&self) -> String {
        match self {
            OrchestrationStatus::Analyzing => {
                "Orkestrator sedang menganalisis permintaan...".to_string()
            }
            OrchestrationStatus::RoutedTo(agent) => {
                format!("Mengarahkan ke {}...", agent.display_name())
            }
            OrchestrationStatus::Clarifying => "Orkestrator meminta klarifikasi...".to_string(),
            OrchestrationStatus::Generating => "Menghasilkan respons...".to_string(),
        }
    }
}

impl std::fmt::Display for OrchestrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
