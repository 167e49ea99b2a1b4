//! Application-level configuration.
//!
//! - [`BehaviorConfig`]: hand-off pacing and routing window
//! - [`ModelConfig`]: routing and agent model selection

pub mod behavior;
pub mod models;

pub use behavior::{BehaviorConfig, DEFAULT_HANDOFF_DELAY};
pub use models::ModelConfig;
