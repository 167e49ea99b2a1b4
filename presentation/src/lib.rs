//! Presentation layer for medicore
//!
//! This crate contains CLI definitions, console formatting,
//! status reporting, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleStatus, StatusReporter};
