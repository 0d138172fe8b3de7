//! Prompt snippet for the statusline: the first line of the last submitted
//! prompt, normalized for single-line display.

use crate::state::StateStore;

/// Maximum visible prompt length before truncation (base characters; the
/// appended ellipsis is not counted).
pub const PROMPT_MAX_LEN: usize = 40;

/// Read the stored prompt and normalize it for display.
///
/// Takes the first line only, collapses whitespace runs to single spaces,
/// trims, and truncates to [`PROMPT_MAX_LEN`] characters plus an ellipsis.
/// Absent or unreadable state yields an empty string.
pub fn prompt_snippet(store: &StateStore) -> String {
    let Some(raw) = store.read_prompt() else {
        return String::new();
    };
    let first_line = raw.lines().next().unwrap_or("");
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&collapsed)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= PROMPT_MAX_LEN {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(PROMPT_MAX_LEN).collect();
    truncated.push('…');
    truncated
}
