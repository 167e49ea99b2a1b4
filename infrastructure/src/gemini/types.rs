//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields this adapter sends or reads are modelled; unknown
//! response fields are ignored.

use medicore_domain::{ChatMessage, ChatRole};
use serde::{Deserialize, Serialize};

/// Request body of `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One role-tagged message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Constrained output settings for classification calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

/// Response body; only the text of the first candidate is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl Content {
    pub fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::text(Some(ChatRole::User.as_str()), text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::text(Some(ChatRole::Model.as_str()), text)
    }

    /// System instructions carry no role.
    pub fn system(text: impl Into<String>) -> Self {
        Self::text(None, text)
    }

    /// Concatenated text of all parts.
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect()
    }
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        Self::text(Some(message.role.as_str()), message.content.clone())
    }
}

impl GenerationConfig {
    pub fn json(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, or an empty string when absent.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(Content::joined_text)
            .unwrap_or_default()
    }
}
