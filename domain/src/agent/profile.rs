//! Agent profiles.

use super::kind::AgentKind;
use serde::Serialize;

/// Accent colour a front-end may use for an agent.
///
/// Rendering hint only; nothing in the core branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Gray,
    Blue,
    Teal,
    Purple,
    Emerald,
}

/// Presentation hints attached to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresentationHints {
    pub accent: Accent,
    /// Icon name from the front-end's icon set.
    pub icon: &'static str,
}

/// Descriptive metadata and directive for one agent (Entity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentProfile {
    pub kind: AgentKind,
    /// Display name shown to the user.
    pub name: &'static str,
    /// Short role label.
    pub role: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Behavioral instruction handed to the model as its system instruction.
    pub directive: &'static str,
    pub hints: PresentationHints,
}
