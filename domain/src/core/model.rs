//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// Both the intent router and the specialist agents talk to models from
/// this set. Anything the service accepts but we don't name is `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini25Flash,
    Gemini25Pro,
    Gemini25FlashLite,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Gemini25FlashLite => "gemini-2.5-flash-lite",
            Model::Custom(s) => s,
        }
    }

    /// Models that ship with a known identifier
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Gemini25Flash,
            Model::Gemini25Pro,
            Model::Gemini25FlashLite,
        ]
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (Gemini 2.5 Flash)
    fn default() -> Self {
        Model::Gemini25Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
