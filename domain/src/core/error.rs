//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown agent identifier: {0}")]
    UnknownAgent(String),

    #[error("Malformed routing output: {0}")]
    MalformedRouting(String),
}

impl DomainError {
    /// Check if this error came from an unrecognized agent identifier
    pub fn is_unknown_agent(&self) -> bool {
        matches!(self, DomainError::UnknownAgent(_))
    }
}
