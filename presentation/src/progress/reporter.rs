//! Progress reporting for in-flight turns

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use medicore_application::TurnProgressNotifier;
use medicore_domain::{AgentKind, ConversationTurn, OrchestrationStatus};
use std::sync::Mutex;
use std::time::Duration;

/// Shows the orchestration status on a spinner while a turn runs.
///
/// The spinner is cleared before the reply is printed.
pub struct StatusReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl StatusReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn spinner(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.spinner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgressNotifier for StatusReporter {
    fn on_status(&self, status: &OrchestrationStatus) {
        let mut spinner = self.spinner();
        let bar = spinner.get_or_insert_with(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(Self::spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        bar.set_message(ConsoleFormatter::format_status(status));
    }

    fn on_agent_turn(&self, _turn: &ConversationTurn) {
        if let Some(bar) = self.spinner().take() {
            bar.finish_and_clear();
        }
    }
}

/// Plain-text progress: one line per status change.
pub struct SimpleStatus;

impl TurnProgressNotifier for SimpleStatus {
    fn on_status(&self, status: &OrchestrationStatus) {
        println!("{} {}", "->".cyan(), ConsoleFormatter::format_status(status));
    }

    fn on_agent_selected(&self, agent: AgentKind) {
        println!("   {}", ConsoleFormatter::agent_label(agent));
    }
}
