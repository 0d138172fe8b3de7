//! Claude Code `settings.json` editing for setup and uninstall.
//!
//! The settings file is treated as an arbitrary JSON object we only touch
//! known corners of: the `statusLine` entry and the `hooks.SessionStart` /
//! `hooks.UserPromptSubmit` arrays. Everything else passes through
//! untouched.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The `~/.claude` directory.
pub fn claude_dir() -> Result<PathBuf, SettingsError> {
    dirs::home_dir()
        .map(|home| home.join(".claude"))
        .ok_or(SettingsError::NoHomeDir)
}

/// Read a settings file as a JSON object. Missing or unparseable files read
/// as an empty object, mirroring how the host itself tolerates them.
pub fn read_settings(path: &Path) -> Value {
    fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str(&contents).ok())
        .filter(Value::is_object)
        .unwrap_or_else(|| json!({}))
}

/// Write the settings object back, pretty-printed.
pub fn write_settings(path: &Path, settings: &Value) -> Result<(), SettingsError> {
    let contents = serde_json::to_string_pretty(settings).unwrap_or_else(|_| "{}".to_string());
    fs::write(path, contents).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Whether any hook under `settings.hooks.<event>` has a command containing
/// `needle`.
pub fn has_hook_command(settings: &Value, event: &str, needle: &str) -> bool {
    let Some(entries) = settings["hooks"][event].as_array() else {
        return false;
    };
    entries.iter().any(|entry| entry_matches(entry, needle))
}

/// Append a command hook under `settings.hooks.<event>` unless one whose
/// command contains `needle` is already present. Returns whether anything
/// was added.
pub fn push_hook(settings: &mut Value, event: &str, command: &str, needle: &str) -> bool {
    if has_hook_command(settings, event, needle) {
        return false;
    }
    let hooks = settings
        .as_object_mut()
        .map(|obj| obj.entry("hooks").or_insert_with(|| json!({})));
    let Some(Value::Object(hooks)) = hooks else {
        return false;
    };
    let entries = hooks.entry(event).or_insert_with(|| json!([]));
    let Some(entries) = entries.as_array_mut() else {
        return false;
    };
    entries.push(json!({
        "hooks": [{ "type": "command", "command": command }]
    }));
    true
}

/// Remove every hook under `settings.hooks.<event>` whose command contains
/// `needle`; drop the event array (and the `hooks` object) if that leaves
/// them empty. Returns whether anything was removed.
pub fn remove_hooks(settings: &mut Value, event: &str, needle: &str) -> bool {
    // Immutable check first: mutable indexing on Value auto-inserts keys,
    // which would pollute settings we then write back.
    if !settings["hooks"][event].is_array() {
        return false;
    }
    let Some(entries) = settings["hooks"][event].as_array_mut() else {
        return false;
    };
    let before = entries.len();
    entries.retain(|entry| !entry_matches(entry, needle));
    let removed = entries.len() < before;
    let now_empty = entries.is_empty();

    if now_empty && let Some(hooks) = settings["hooks"].as_object_mut() {
        hooks.remove(event);
        if hooks.is_empty()
            && let Some(obj) = settings.as_object_mut()
        {
            obj.remove("hooks");
        }
    }
    removed
}

fn entry_matches(entry: &Value, needle: &str) -> bool {
    entry["hooks"].as_array().is_some_and(|inner| {
        inner
            .iter()
            .any(|hook| hook["command"].as_str().is_some_and(|c| c.contains(needle)))
    })
}
