//! Configure Claude Code to use this statusline.
//!
//! Edits `~/.claude/settings.json`: installs the `statusLine` command and the
//! two lifecycle hooks (save the prompt on submit, clear state on session
//! start), and creates the state directory. Re-running is idempotent.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::settings;

const SETTINGS_FILE: &str = "settings.json";
const STATE_DIR_NAME: &str = "statusline-state";

/// Install into the user's `~/.claude`.
pub fn setup(out: &mut impl Write) -> Result<()> {
    let claude_dir = settings::claude_dir()?;
    let exe = std::env::current_exe().context("could not determine executable path")?;
    setup_at(&claude_dir, &exe.display().to_string(), out)
}

/// Install into an explicit Claude directory (separated out for tests).
pub fn setup_at(claude_dir: &Path, exe: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Setting up glance...\n")?;

    let state_dir = claude_dir.join(STATE_DIR_NAME);
    fs::create_dir_all(&state_dir)
        .with_context(|| format!("failed to create {}", state_dir.display()))?;

    let settings_path = claude_dir.join(SETTINGS_FILE);
    let mut doc = settings::read_settings(&settings_path);

    let mut changed = Vec::new();
    let mut skipped = Vec::new();

    // Statusline command (always overwritten — the exe path may have moved)
    doc["statusLine"] = json!({
        "type": "command",
        "command": format!("{exe} statusline"),
    });
    changed.push("statusLine command".to_string());

    for (event, subcommand) in [
        ("SessionStart", "clear-state"),
        ("UserPromptSubmit", "save-prompt"),
    ] {
        let command = format!("{exe} {subcommand}");
        if settings::push_hook(&mut doc, event, &command, subcommand) {
            changed.push(format!("hooks.{event}"));
        } else {
            skipped.push(format!("hooks.{event}"));
        }
    }

    settings::write_settings(&settings_path, &doc)?;

    writeln!(out, "Updated {}:", settings_path.display())?;
    for entry in &changed {
        writeln!(out, "  {entry}")?;
    }
    if !skipped.is_empty() {
        writeln!(out, "Already configured:")?;
        for entry in &skipped {
            writeln!(out, "  {entry}")?;
        }
    }
    writeln!(out, "\nRestart Claude Code to see your new statusline.")?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    fn run_setup(claude_dir: &Path) -> Value {
        let mut out = Vec::new();
        setup_at(claude_dir, "/usr/local/bin/glance", &mut out).unwrap();
        settings::read_settings(&claude_dir.join(SETTINGS_FILE))
    }

    #[test]
    fn installs_statusline_and_hooks() {
        let dir = TempDir::new().unwrap();
        let doc = run_setup(dir.path());

        assert_eq!(
            doc["statusLine"]["command"].as_str().unwrap(),
            "/usr/local/bin/glance statusline"
        );
        assert!(settings::has_hook_command(&doc, "SessionStart", "clear-state"));
        assert!(settings::has_hook_command(&doc, "UserPromptSubmit", "save-prompt"));
        assert!(dir.path().join(STATE_DIR_NAME).is_dir());
    }

    #[test]
    fn rerunning_does_not_duplicate_hooks() {
        let dir = TempDir::new().unwrap();
        run_setup(dir.path());
        let doc = run_setup(dir.path());

        assert_eq!(doc["hooks"]["SessionStart"].as_array().unwrap().len(), 1);
        assert_eq!(doc["hooks"]["UserPromptSubmit"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn preserves_unrelated_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let doc = run_setup(dir.path());
        assert_eq!(doc["theme"].as_str().unwrap(), "dark");
    }
}
