//! Conversation entities

use crate::agent::kind::AgentKind;
use crate::session::entities::ChatMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Agent,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Agent => "agent",
        }
    }
}

/// Identifier of a turn, unique and increasing within one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TurnId(u64);

impl TurnId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "turn-{}", self.0)
    }
}

/// One entry in the conversation log (Entity).
///
/// `agent` is `Some` exactly when `speaker` is [`Speaker::Agent`]; the
/// constructors are the only way to build a turn, so the pairing holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    id: TurnId,
    speaker: Speaker,
    content: String,
    agent: Option<AgentKind>,
    created_at: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(id: TurnId, content: impl Into<String>) -> Self {
        Self {
            id,
            speaker: Speaker::User,
            content: content.into(),
            agent: None,
            created_at: Utc::now(),
        }
    }

    pub fn agent(id: TurnId, agent: AgentKind, content: impl Into<String>) -> Self {
        Self {
            id,
            speaker: Speaker::Agent,
            content: content.into(),
            agent: Some(agent),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TurnId {
        self.id
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn agent_kind(&self) -> Option<AgentKind> {
        self.agent
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }

    /// Map to the two-role form used for generation history.
    pub fn to_chat_message(&self) -> ChatMessage {
        match self.speaker {
            Speaker::User => ChatMessage::user(self.content.clone()),
            Speaker::Agent => ChatMessage::model(self.content.clone()),
        }
    }
}
