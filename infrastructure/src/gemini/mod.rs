//! Gemini adapter
//!
//! Implements the [`LlmGateway`](medicore_application::LlmGateway) port
//! against the Gemini `generateContent` REST endpoint. Classification uses
//! JSON-constrained output; chat sessions keep their history locally.

pub mod client;
pub mod error;
pub mod gateway;
pub mod session;
pub mod types;
