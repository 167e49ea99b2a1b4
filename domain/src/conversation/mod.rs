//! Conversation domain.
//!
//! - [`entities::ConversationTurn`]: one user or agent turn
//! - [`log::ConversationLog`]: ordered, append-only turn sequence
//! - [`messages`]: welcome and fallback texts

pub mod entities;
pub mod log;
pub mod messages;
