//! Interactive chat module
//!
//! Provides a line-editor chat interface over one conversation session.

mod repl;

pub use repl::ChatRepl;
