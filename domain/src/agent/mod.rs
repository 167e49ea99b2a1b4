//! Agent domain.
//!
//! - [`kind::AgentKind`]: the closed set of routable agents
//! - [`profile::AgentProfile`]: metadata and directive for one agent
//! - [`registry`]: total, immutable mapping from kind to profile

pub mod directives;
pub mod kind;
pub mod profile;
pub mod registry;
