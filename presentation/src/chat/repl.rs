//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::StatusReporter;
use medicore_application::{ConversationOrchestrator, NoTurnProgress, SubmitOutcome};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;

const HISTORY_CAPACITY: usize = 1000;

/// What a slash command asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandAction {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    orchestrator: Arc<ConversationOrchestrator>,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(orchestrator: Arc<ConversationOrchestrator>) -> Self {
        Self {
            orchestrator,
            show_progress: true,
            history_file: Self::default_history_file(),
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the line-history file; `None` keeps history in memory only.
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    pub fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("medicore").join("history.txt"))
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_file else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                eprintln!("Warning: history disabled ({}): {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("medicore".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let trimmed = line.trim();

                    // Skip empty lines
                    if trimmed.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if trimmed.starts_with('/') {
                        if self.handle_command(trimmed) == CommandAction::Exit {
                            break;
                        }
                        continue;
                    }

                    self.process_message(&line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Sampai jumpa!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!(
            "{}",
            ConsoleFormatter::format_welcome(&self.orchestrator.snapshot())
        );
        println!("Ketik /help untuk daftar perintah.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /agents           - Show agents and which one is active");
        println!("  /history          - Show the conversation so far");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands.
    fn handle_command(&self, cmd: &str) -> CommandAction {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Sampai jumpa!");
                CommandAction::Exit
            }
            "/help" | "/h" | "/?" => {
                Self::print_help();
                CommandAction::Continue
            }
            "/agents" => {
                let snapshot = self.orchestrator.snapshot();
                println!("{}", ConsoleFormatter::format_roster(snapshot.active_agent));
                CommandAction::Continue
            }
            "/history" => {
                let snapshot = self.orchestrator.snapshot();
                println!();
                println!("{}", ConsoleFormatter::format_history(&snapshot.turns));
                CommandAction::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandAction::Continue
            }
        }
    }

    async fn process_message(&self, message: &str) {
        println!();

        let outcome = if self.show_progress {
            let progress = StatusReporter::new();
            self.orchestrator
                .submit_with_progress(message, &progress)
                .await
        } else {
            self.orchestrator
                .submit_with_progress(message, &NoTurnProgress)
                .await
        };

        match outcome {
            SubmitOutcome::Completed(turn) => {
                println!("{}", ConsoleFormatter::format_turn(&turn));
            }
            SubmitOutcome::Rejected(reason) => {
                println!("{}", ConsoleFormatter::format_rejection(reason));
            }
        }
        println!();
    }
}
