//! End-to-end statusline rendering: real state directory, real git
//! repository, session context on stdin, one composed line out.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::process::{Command, Stdio};

use glance::commands::statusline::statusline;
use glance::git::{GitClient, SystemGit};
use glance::render::SEPARATOR;
use glance::state::StateStore;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

fn init_repo(dir: &Path) {
    git(dir, &["init", "-b", "main"]);
    git(dir, &["config", "user.email", "test@test.com"]);
    git(dir, &["config", "user.name", "Test"]);
    std::fs::write(dir.join("README.md"), "# test\n").unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", "initial commit"]);
}

fn render(input: &str, store: &StateStore) -> String {
    let mut out = Vec::new();
    statusline(&mut input.as_bytes(), &mut out, store, &SystemGit).unwrap();
    String::from_utf8(out).unwrap()
}

/// Strip ANSI escape sequences so assertions see the plain text.
fn strip_ansi(line: &str) -> String {
    let mut plain = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[test]
fn full_line_with_all_three_segments() {
    let state = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    init_repo(repo.path());
    std::fs::write(repo.path().join("dirty.txt"), "x\n").unwrap();

    let store = StateStore::new(state.path());
    store.write_prompt("fix the parser\nmore detail");

    let input = format!(
        r#"{{"model":{{"display_name":"Claude Opus 4.5"}},"workspace":{{"current_dir":"{}"}}}}"#,
        repo.path().display()
    );
    let line = strip_ansi(&render(&input, &store));

    assert_eq!(line, format!("✎ fix the parser{SEPARATOR} main ±1{SEPARATOR}Opus-4.5\n"));
}

#[test]
fn repeated_renders_reuse_the_cache() {
    let state = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    init_repo(repo.path());

    let store = StateStore::new(state.path());
    let input = format!(
        r#"{{"workspace":{{"current_dir":"{}"}}}}"#,
        repo.path().display()
    );

    let first = render(&input, &store);
    // Dirty the repo; within the TTL the rendered status must not change
    std::fs::write(repo.path().join("new.txt"), "x\n").unwrap();
    let second = render(&input, &store);
    assert_eq!(first, second);
}

#[test]
fn non_repo_workspace_renders_model_only() {
    let state = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let store = StateStore::new(state.path());

    // Guard: a tempdir nested under some outer repo would have git status
    if SystemGit.is_work_tree(workspace.path()) {
        return;
    }

    let input = format!(
        r#"{{"model":{{"display_name":"Claude Sonnet 4"}},"workspace":{{"current_dir":"{}"}}}}"#,
        workspace.path().display()
    );
    let line = strip_ansi(&render(&input, &store));
    assert_eq!(line, "Sonnet-4\n");
}

#[test]
fn empty_input_still_renders_a_line() {
    let state = TempDir::new().unwrap();
    let store = StateStore::new(state.path());
    assert_eq!(render("", &store), "\n");
}
