//! Classifier output parsing.
//!
//! Pure text handling: turns the raw classifier output into an
//! [`AgentKind`] or explains why it couldn't.

use super::prompt::TARGET_AGENT_FIELD;
use crate::agent::kind::AgentKind;
use crate::core::error::DomainError;

/// Parse the classifier's raw JSON output.
///
/// Accepts `{"targetAgent": "<WIRE_NAME>"}`, optionally wrapped in a
/// Markdown code fence. Missing field, non-string value, invalid JSON and
/// unknown identifiers are all errors.
pub fn parse_routing_output(raw: &str) -> Result<AgentKind, DomainError> {
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return Err(DomainError::MalformedRouting("empty output".to_string()));
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| DomainError::MalformedRouting(format!("invalid JSON: {}", e)))?;

    let target = value
        .get(TARGET_AGENT_FIELD)
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            DomainError::MalformedRouting(format!("missing string field `{}`", TARGET_AGENT_FIELD))
        })?;

    target.parse()
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the opening line
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
