//! LLM session domain.
//!
//! - [`entities::ChatMessage`]: a role-tagged message handed to the generator

pub mod entities;
