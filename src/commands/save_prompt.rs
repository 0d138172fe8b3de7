//! UserPromptSubmit hook: persist the submitted prompt for the next render.

use std::io::Read;

use serde::Deserialize;

use crate::state::StateStore;

#[derive(Debug, Default, Deserialize)]
struct HookInput {
    #[serde(default)]
    prompt: Option<String>,
}

/// Read the hook payload from `input` and store its `prompt` field verbatim.
///
/// No-op when the field is absent or the payload is malformed. Write
/// failures are swallowed — the statusline just won't show a prompt.
pub fn save_prompt(input: &mut impl Read, store: &StateStore) {
    let mut bytes = Vec::new();
    if input.read_to_end(&mut bytes).is_err() {
        return;
    }
    let hook: HookInput = serde_json::from_slice(&bytes).unwrap_or_default();
    if let Some(prompt) = hook.prompt
        && !prompt.is_empty()
    {
        store.write_prompt(&prompt);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stores_prompt_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());

        let mut input: &[u8] = br#"{"prompt":"fix the bug\nsecond line"}"#;
        save_prompt(&mut input, &store);
        assert_eq!(
            store.read_prompt().as_deref(),
            Some("fix the bug\nsecond line")
        );
    }

    #[test]
    fn overwrites_previous_prompt() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());
        store.write_prompt("old");

        let mut input: &[u8] = br#"{"prompt":"new"}"#;
        save_prompt(&mut input, &store);
        assert_eq!(store.read_prompt().as_deref(), Some("new"));
    }

    #[test]
    fn missing_prompt_field_leaves_state_alone() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());
        store.write_prompt("keep me");

        let mut input: &[u8] = br#"{"session_id":"abc"}"#;
        save_prompt(&mut input, &store);
        assert_eq!(store.read_prompt().as_deref(), Some("keep me"));
    }

    #[test]
    fn malformed_payload_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());

        let mut input: &[u8] = b"garbage";
        save_prompt(&mut input, &store);
        assert_eq!(store.read_prompt(), None);
    }
}
