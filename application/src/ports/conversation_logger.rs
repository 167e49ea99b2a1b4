//! Port for structured conversation transcripts.
//!
//! [`ConversationLogger`] records what happened in a session (user turns,
//! routing decisions, agent replies, failures) in machine-readable form.
//! Human-readable diagnostics go through `tracing` instead.

use serde_json::Value;

/// A structured conversation event.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "user_turn", "routing_decision").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events.
///
/// `log` is synchronous and infallible: a transcript that can't be written
/// must never interrupt a turn.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when transcripts are disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
