//! Append-only conversation log.

use super::entities::{ConversationTurn, TurnId};
use super::messages::WELCOME_MESSAGE;
use crate::agent::kind::AgentKind;
use crate::session::entities::ChatMessage;

/// Ordered, append-only sequence of turns.
///
/// Turns can only be appended. Ids are issued by the log itself, so
/// creation order and id order always agree.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
    next_id: TurnId,
}

impl ConversationLog {
    /// An empty log.
    pub fn empty() -> Self {
        Self {
            turns: Vec::new(),
            next_id: TurnId::new(1),
        }
    }

    /// A log seeded with the orchestrator's welcome turn.
    pub fn seeded() -> Self {
        let mut log = Self::empty();
        log.append_agent(AgentKind::Orchestrator, WELCOME_MESSAGE);
        log
    }

    pub fn append_user(&mut self, content: impl Into<String>) -> &ConversationTurn {
        let id = self.issue_id();
        self.push(ConversationTurn::user(id, content))
    }

    pub fn append_agent(
        &mut self,
        agent: AgentKind,
        content: impl Into<String>,
    ) -> &ConversationTurn {
        let id = self.issue_id();
        self.push(ConversationTurn::agent(id, agent, content))
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Generation history for every turn currently in the log.
    pub fn chat_history(&self) -> Vec<ChatMessage> {
        self.turns.iter().map(ConversationTurn::to_chat_message).collect()
    }

    fn issue_id(&mut self) -> TurnId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn push(&mut self, turn: ConversationTurn) -> &ConversationTurn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::seeded()
    }
}
