//! Turn pacing and routing parameters.

use medicore_domain::DEFAULT_ROUTING_WINDOW;
use std::time::Duration;

/// Default pause between routing and generation.
pub const DEFAULT_HANDOFF_DELAY: Duration = Duration::from_millis(800);

/// Orchestrator behavior configuration.
///
/// Controls how many history entries the router sees and how long the
/// orchestrator pauses after announcing a hand-off. The pause is UX pacing
/// only; set it to zero in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorConfig {
    /// Pause between the routing confirmation and generation.
    pub handoff_delay: Duration,
    /// Number of recent turns included as routing context.
    pub routing_window: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            handoff_delay: DEFAULT_HANDOFF_DELAY,
            routing_window: DEFAULT_ROUTING_WINDOW,
        }
    }
}

impl BehaviorConfig {
    /// No pacing delay, default routing window.
    pub fn immediate() -> Self {
        Self::default().with_handoff_delay(Duration::ZERO)
    }

    pub fn with_handoff_delay(mut self, delay: Duration) -> Self {
        self.handoff_delay = delay;
        self
    }

    pub fn with_handoff_delay_ms(self, millis: u64) -> Self {
        self.with_handoff_delay(Duration::from_millis(millis))
    }

    pub fn with_routing_window(mut self, window: usize) -> Self {
        self.routing_window = window;
        self
    }
}
