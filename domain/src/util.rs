//! Shared utility functions.

use std::borrow::Cow;

/// Shorten `text` to at most `max_chars` characters for log lines.
///
/// Counts characters, not bytes, so multi-byte text is never split. An
/// ellipsis is appended when anything was cut.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}…", &text[..cut])),
    }
}
