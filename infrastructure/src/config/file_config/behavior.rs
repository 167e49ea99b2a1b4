//! Behavior configuration from TOML (`[behavior]` section)

use medicore_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Pause between announcing the chosen agent and generating, in ms
    pub handoff_delay_ms: u64,
    /// Recent turns the router sees
    pub routing_window: usize,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        let defaults = BehaviorConfig::default();
        Self {
            handoff_delay_ms: defaults.handoff_delay.as_millis() as u64,
            routing_window: defaults.routing_window,
        }
    }
}

impl FileBehaviorConfig {
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::default()
            .with_handoff_delay_ms(self.handoff_delay_ms)
            .with_routing_window(self.routing_window)
    }
}
