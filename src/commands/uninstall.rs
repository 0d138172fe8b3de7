//! Remove the statusline configuration from Claude Code.
//!
//! Strips only entries that reference this tool, leaves everything else in
//! `settings.json` untouched, and removes the state directory.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::settings;

const SETTINGS_FILE: &str = "settings.json";
const STATE_DIR_NAME: &str = "statusline-state";

/// Marker identifying our entries in settings.json.
const MARKER: &str = env!("CARGO_PKG_NAME");

/// Uninstall from the user's `~/.claude`.
pub fn uninstall(out: &mut impl Write) -> Result<()> {
    let claude_dir = settings::claude_dir()?;
    uninstall_at(&claude_dir, out)
}

/// Uninstall from an explicit Claude directory (separated out for tests).
pub fn uninstall_at(claude_dir: &Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Uninstalling glance...\n")?;

    let settings_path = claude_dir.join(SETTINGS_FILE);
    let mut removed = Vec::new();

    if settings_path.exists() {
        let mut doc = settings::read_settings(&settings_path);

        let ours = doc["statusLine"]["command"]
            .as_str()
            .is_some_and(|command| command.contains(MARKER));
        if ours && let Some(obj) = doc.as_object_mut() {
            obj.remove("statusLine");
            removed.push("statusLine command".to_string());
        }

        for event in ["SessionStart", "UserPromptSubmit"] {
            if settings::remove_hooks(&mut doc, event, MARKER) {
                removed.push(format!("hooks.{event}"));
            }
        }

        if !removed.is_empty() {
            settings::write_settings(&settings_path, &doc)?;
        }
    }

    let state_dir = claude_dir.join(STATE_DIR_NAME);
    if state_dir.exists() {
        if fs::remove_dir_all(&state_dir).is_ok() {
            removed.push("state directory".to_string());
        } else {
            writeln!(out, "Could not remove state directory {}", state_dir.display())?;
        }
    }

    if removed.is_empty() {
        writeln!(out, "Nothing to uninstall.")?;
    } else {
        writeln!(out, "Removed:")?;
        for entry in &removed {
            writeln!(out, "  {entry}")?;
        }
    }

    Ok(())
}
