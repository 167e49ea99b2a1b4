//! Routing value objects

use crate::conversation::entities::{ConversationTurn, Speaker};
use serde::{Deserialize, Serialize};

/// One line of routing context: who spoke and what they said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl RoutingEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    /// Render as a context line. Agent turns are labelled `System`.
    pub fn render(&self) -> String {
        let label = match self.speaker {
            Speaker::User => "User",
            Speaker::Agent => "System",
        };
        format!("{}: {}", label, self.text)
    }
}

impl From<&ConversationTurn> for RoutingEntry {
    fn from(turn: &ConversationTurn) -> Self {
        Self::new(turn.speaker(), turn.content())
    }
}

/// Constrained single-field output schema.
///
/// Describes a JSON object with exactly one required string property whose
/// value must be one of `choices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSchema {
    pub field: String,
    pub description: String,
    pub choices: Vec<String>,
}

impl ChoiceSchema {
    /// Render as an OpenAPI-style schema object.
    pub fn to_json_schema(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        properties.insert(
            self.field.clone(),
            serde_json::json!({
                "type": "STRING",
                "enum": self.choices,
                "description": self.description,
            }),
        );
        serde_json::json!({
            "type": "OBJECT",
            "properties": properties,
            "required": [self.field],
        })
    }
}

/// Request handed to the classification capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub schema: ChoiceSchema,
}
