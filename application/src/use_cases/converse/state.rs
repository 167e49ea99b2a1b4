//! Conversation state owned by the orchestrator.

use super::types::{ConversationSnapshot, RejectReason};
use medicore_domain::{
    AgentKind, ChatMessage, ConversationLog, ConversationTurn, OrchestrationStatus, RoutingEntry,
    TurnPhase,
};

/// Context captured when a turn is accepted, before its user turn lands.
#[derive(Debug, Clone)]
pub(crate) struct TurnContext {
    /// The user turn just appended.
    pub user_turn: ConversationTurn,
    /// Every turn before the user turn, for routing.
    pub routing_history: Vec<RoutingEntry>,
    /// Every turn before the user turn, for generation.
    pub prior_turns: Vec<ChatMessage>,
}

/// Message log plus the in-flight indicators a front-end renders.
///
/// Public accessors are read-only; only the orchestrator in this crate
/// mutates it.
#[derive(Debug, Clone)]
pub struct ConversationState {
    log: ConversationLog,
    active_agent: AgentKind,
    awaiting_response: bool,
    status: Option<OrchestrationStatus>,
    phase: TurnPhase,
}

impl ConversationState {
    /// Fresh session: welcome turn, orchestrator active, idle.
    pub fn new() -> Self {
        Self {
            log: ConversationLog::seeded(),
            active_agent: AgentKind::Orchestrator,
            awaiting_response: false,
            status: None,
            phase: TurnPhase::Idle,
        }
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        self.log.turns()
    }

    pub fn active_agent(&self) -> AgentKind {
        self.active_agent
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn status(&self) -> Option<OrchestrationStatus> {
        self.status
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            turns: self.log.turns().to_vec(),
            active_agent: self.active_agent,
            awaiting_response: self.awaiting_response,
            status: self.status,
            phase: self.phase,
        }
    }

    /// Accept `text` as a new user turn, or say why not.
    ///
    /// On success the user turn is appended, the state is marked as
    /// awaiting a response and the history before the turn is returned.
    pub(crate) fn begin_turn(&mut self, text: &str) -> Result<TurnContext, RejectReason> {
        if self.awaiting_response {
            return Err(RejectReason::Busy);
        }
        if text.trim().is_empty() {
            return Err(RejectReason::Blank);
        }

        let routing_history = self.log.turns().iter().map(RoutingEntry::from).collect();
        let prior_turns = self.log.chat_history();
        let user_turn = self.log.append_user(text).clone();

        self.awaiting_response = true;
        self.active_agent = AgentKind::Orchestrator;
        self.set_status(OrchestrationStatus::Analyzing);

        Ok(TurnContext {
            user_turn,
            routing_history,
            prior_turns,
        })
    }

    pub(crate) fn set_status(&mut self, status: OrchestrationStatus) {
        self.phase = status.phase();
        self.status = Some(status);
    }

    pub(crate) fn set_active_agent(&mut self, agent: AgentKind) {
        self.active_agent = agent;
    }

    /// Append the agent turn that ends the in-flight turn and go idle.
    pub(crate) fn finish_turn(
        &mut self,
        agent: AgentKind,
        content: impl Into<String>,
    ) -> ConversationTurn {
        let turn = self.log.append_agent(agent, content).clone();
        self.active_agent = agent;
        self.awaiting_response = false;
        self.status = None;
        self.phase = TurnPhase::Idle;
        turn
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medicore_domain::{ChatRole, Speaker, WELCOME_MESSAGE};

    #[test]
    fn test_new_state() {
        let state = ConversationState::new();
        assert_eq!(state.turns().len(), 1);
        assert_eq!(state.turns()[0].content(), WELCOME_MESSAGE);
        assert_eq!(state.active_agent(), AgentKind::Orchestrator);
        assert!(!state.is_awaiting_response());
        assert_eq!(state.status(), None);
        assert!(state.phase().is_idle());
    }

    #[test]
    fn test_begin_turn_context_excludes_new_turn() {
        let mut state = ConversationState::new();
        let ctx = state.begin_turn("tagihan saya").unwrap();

        assert_eq!(ctx.user_turn.content(), "tagihan saya");
        assert_eq!(ctx.routing_history.len(), 1);
        assert_eq!(ctx.routing_history[0].speaker, Speaker::Agent);
        assert_eq!(ctx.prior_turns.len(), 1);
        assert_eq!(ctx.prior_turns[0].role, ChatRole::Model);

        assert_eq!(state.turns().len(), 2);
        assert!(state.is_awaiting_response());
        assert_eq!(state.status(), Some(OrchestrationStatus::Analyzing));
        assert_eq!(state.phase(), TurnPhase::Routing);
    }

    #[test]
    fn test_begin_turn_rejections_leave_log_alone() {
        let mut state = ConversationState::new();
        assert_eq!(state.begin_turn("  \n").unwrap_err(), RejectReason::Blank);
        assert_eq!(state.turns().len(), 1);

        state.begin_turn("pertama").unwrap();
        assert_eq!(state.begin_turn("kedua").unwrap_err(), RejectReason::Busy);
        assert_eq!(state.turns().len(), 2);
    }

    #[test]
    fn test_finish_turn_goes_idle_and_keeps_speaker_active() {
        let mut state = ConversationState::new();
        state.begin_turn("jadwal").unwrap();
        state.set_active_agent(AgentKind::AppointmentScheduling);
        state.set_status(OrchestrationStatus::Generating);

        let turn = state.finish_turn(AgentKind::AppointmentScheduling, "Sudah dijadwalkan.");

        assert_eq!(turn.agent_kind(), Some(AgentKind::AppointmentScheduling));
        assert_eq!(state.turns().len(), 3);
        assert!(!state.is_awaiting_response());
        assert_eq!(state.status(), None);
        assert!(state.phase().is_idle());
        assert_eq!(state.active_agent(), AgentKind::AppointmentScheduling);
    }
}
